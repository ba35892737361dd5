use fixcap::{FixVec, FixVecError};

#[test]
fn test_capacity_error_carries_both_numbers() {
    let mut vec: FixVec<u8, 2> = FixVec::from_slice(&[1, 2]).unwrap();

    let error = vec.push(3).unwrap_err();

    assert_eq!(
        error,
        FixVecError::CapacityExceeded {
            requested: 3,
            capacity: 2
        }
    );
}

#[test]
fn test_index_error_carries_both_numbers() {
    let vec: FixVec<u8, 8> = FixVec::from_slice(&[1]).unwrap();

    let error = vec.try_get(5).unwrap_err();

    assert_eq!(
        error,
        FixVecError::IndexOutOfRange {
            index: 5,
            length: 1
        }
    );
}

#[test]
fn test_error_messages_name_the_numbers() {
    let capacity = FixVecError::CapacityExceeded {
        requested: 9,
        capacity: 4,
    };
    let message = format!("{}", capacity);
    assert!(message.starts_with("Capacity exceeded"));
    assert!(message.contains("9"));
    assert!(message.contains("fixed at 4"));

    let index = FixVecError::IndexOutOfRange {
        index: 5,
        length: 2,
    };
    let message = format!("{}", index);
    assert!(message.starts_with("Index out of range"));
    assert!(message.contains("index 5"));
    assert!(message.contains("length 2"));
}

#[test]
fn test_errors_implement_standard_traits() {
    let error = FixVecError::CapacityExceeded {
        requested: 3,
        capacity: 2,
    };

    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("CapacityExceeded"));

    let cloned = error.clone();
    assert_eq!(error, cloned);

    assert_ne!(
        error,
        FixVecError::IndexOutOfRange {
            index: 0,
            length: 0
        }
    );

    let _: &dyn std::error::Error = &error;
}

#[test]
fn test_errors_propagate_with_question_mark() {
    fn build() -> Result<FixVec<u8, 2>, FixVecError> {
        let mut vec = FixVec::new();
        vec.push(1)?;
        vec.push(2)?;
        vec.push(3)?;
        Ok(vec)
    }

    assert_eq!(
        build().unwrap_err(),
        FixVecError::CapacityExceeded {
            requested: 3,
            capacity: 2
        }
    );
}

#[test]
fn test_all_error_messages_are_descriptive() {
    let errors = [
        FixVecError::CapacityExceeded {
            requested: 100,
            capacity: 50,
        },
        FixVecError::IndexOutOfRange {
            index: 5,
            length: 2,
        },
    ];

    for error in &errors {
        let message = format!("{}", error);
        assert!(
            message.len() > 10,
            "error message should be descriptive for {:?}",
            error
        );
    }
}
