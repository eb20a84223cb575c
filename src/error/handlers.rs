//! Error handlers
//!
//! Maps inspector errors to log output and process exit codes.

use crate::error::types::InspectorError;
use log::error;

/// Log an inspector error
pub fn handle_error(err: &InspectorError) {
    error!("Inspector error: {}", err);
}

/// Convert error to process exit code
pub fn exit_code(err: &InspectorError) -> i32 {
    match err {
        InspectorError::Config(_) => 2,
        InspectorError::Tree(_) => 1,
        InspectorError::IoError(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;

    #[test]
    fn test_exit_codes() {
        let config_err = InspectorError::Config(config::ConfigError::Message("bad".into()));
        assert_eq!(exit_code(&config_err), 2);

        let tree_err = InspectorError::Tree(TreeError::InvalidPath("/".into()));
        assert_eq!(exit_code(&tree_err), 1);
    }
}
