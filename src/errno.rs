//! OS error lookup: human-readable description of an errno value.

/// Returns the OS description of `errno`, e.g. "Resource temporarily
/// unavailable (os error 11)" for `EAGAIN` on Linux.
pub fn strerror(errno: i32) -> String {
    std::io::Error::from_raw_os_error(errno).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strerror_describes_known_errnos() {
        let eagain = strerror(11);
        assert!(!eagain.is_empty());
        // distinct errnos yield distinct descriptions
        assert_ne!(strerror(2), strerror(13));
    }
}
