#[cfg(test)]
mod common_tests {
    use crate::common::common::current_time;
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("something broke");
        assert_eq!(format!("{}", error), "something broke");
    }

    #[test]
    fn test_custom_error_clone() {
        let error = CustomError::new("original");
        let cloned = error.clone();
        assert_eq!(error.message, cloned.message);
    }

    #[test]
    fn test_current_time_is_recent() {
        let now = current_time();
        assert!(now > 1_700_000_000, "Timestamp should be past 2023");
    }
}
