//! Address splitting: combined `host/path` strings into their two halves.

use crate::error::FetchError;

/// Split a combined address at the first `/` into host and path.
///
/// An address with no separator is all host and gets `/` as its path.
pub fn split_address(address: &str) -> Result<(&str, &str), FetchError> {
    if address.is_empty() {
        return Err(FetchError::EmptyAddress);
    }
    match address.find('/') {
        Some(index) => Ok((&address[..index], &address[index..])),
        None => Ok((address, "/")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_separator() {
        let (host, path) = split_address("www.example.com/station/now_playing.php").unwrap();
        assert_eq!(host, "www.example.com");
        assert_eq!(path, "/station/now_playing.php");
    }

    #[test]
    fn later_separators_stay_in_the_path() {
        let (host, path) = split_address("example.com/a/b/c").unwrap();
        assert_eq!(host, "example.com");
        assert_eq!(path, "/a/b/c");
    }

    #[test]
    fn bare_host_gets_root_path() {
        let (host, path) = split_address("example.com").unwrap();
        assert_eq!(host, "example.com");
        assert_eq!(path, "/");
    }

    #[test]
    fn empty_address_is_rejected() {
        assert!(matches!(
            split_address(""),
            Err(FetchError::EmptyAddress)
        ));
    }
}
