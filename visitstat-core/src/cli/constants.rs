pub const MISSING_ARGUMENT_ERR: &str =
    "Please provide the path to the logs file as a command-line argument.";
pub const ERROR_READING_LOGS: &str = "Error reading logs: ";
pub const ERROR_GEOIP: &str = "Failed to open the GeoIP File: ";
pub const INVALID_LOG_MSG: &str = "Invalid log: ";
