//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use pentomino::SolverError;
    use pentomino::io::error::{WithOperation, invalid_board_size, unparseable_board_size};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error = SolverError::Output {
            operation: "write solution",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(invalid_board_size(7, 7, "bad").source().is_none());
    }

    // Tests InvalidBoardSize error formatting
    // Verified by omitting dimensions from message
    #[test]
    fn test_invalid_board_size_error() {
        let error = invalid_board_size(7, 7, "must cover 60 or 64 cells");

        let message = error.to_string();
        assert!(message.contains("7x7"));
        assert!(message.contains("must cover 60 or 64 cells"));
    }

    // Tests UnparseableBoardSize error contains all fields
    // Verified by omitting the input text from message
    #[test]
    fn test_unparseable_board_size_error() {
        let error = unparseable_board_size("abc", &"invalid digit found in string");

        let message = error.to_string();
        assert!(message.contains("'abc'"));
        assert!(message.contains("invalid digit"));
        assert!(matches!(error, SolverError::UnparseableBoardSize { .. }));
    }

    // Tests conversion from io::Error
    // Verified by dropping the source in the conversion
    #[test]
    fn test_from_io_error() {
        let error = SolverError::from(std::io::Error::other("disk full"));

        match &error {
            SolverError::Output { operation, source } => {
                assert_eq!(*operation, "write");
                assert_eq!(source.to_string(), "disk full");
            }
            _ => unreachable!("Expected Output error type"),
        }
        assert!(error.to_string().contains("disk full"));
    }

    // Tests the operation label reaches the message
    // Verified by attaching a fixed label
    #[test]
    fn test_with_operation() {
        let ok: std::io::Result<u8> = Ok(3);
        assert_eq!(ok.with_operation("write summary").unwrap(), 3);

        let failed: std::io::Result<u8> = Err(std::io::Error::other("closed"));
        let message = failed.with_operation("write summary").unwrap_err().to_string();
        assert!(message.contains("write summary"));
        assert!(message.contains("closed"));
    }
}
