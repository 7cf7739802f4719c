//! Continuation-token pagination for list and describe operations.

use crate::error::{CmdletError, Result};
use crate::invoke::Operation;

/// An operation whose response carries a page of items and a continuation token.
pub trait Paginated: Operation {
    type Item;

    /// Largest page size the service accepts.
    const MAX_PAGE_SIZE: usize;

    fn set_next_token(request: &mut Self::Request, token: Option<String>);

    fn set_page_size(request: &mut Self::Request, size: usize);

    fn next_token(response: &Self::Response) -> Option<&str>;

    fn items_mut(response: &mut Self::Response) -> &mut Vec<Self::Item>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// Total number of items to emit across all pages.
    pub max_items: Option<usize>,
    /// When false exactly one page is fetched.
    pub auto_iterate: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            max_items: None,
            auto_iterate: true,
        }
    }
}

impl PageOptions {
    pub fn new(max_items: Option<usize>, no_auto_iteration: bool) -> Result<Self> {
        if max_items == Some(0) {
            return Err(CmdletError::invalid_argument(
                "MaxItems",
                "0",
                "the value must be greater than zero",
            ));
        }
        Ok(Self {
            max_items,
            auto_iterate: !no_auto_iteration,
        })
    }
}

/// Page size to request given how many items are still wanted. `None` leaves
/// the service default in place.
pub fn page_size_hint(remaining: Option<usize>, max_page_size: usize) -> Option<usize> {
    remaining.map(|left| left.min(max_page_size))
}

/// Normalizes a returned continuation token; empty means exhausted.
pub fn continuation(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_hint() {
        assert_eq!(page_size_hint(None, 100), None);
        assert_eq!(page_size_hint(Some(5), 100), Some(5));
        assert_eq!(page_size_hint(Some(500), 100), Some(100));
    }

    #[test]
    fn test_continuation_empty_is_done() {
        assert_eq!(continuation(Some("")), None);
        assert_eq!(continuation(None), None);
        assert_eq!(continuation(Some("abc")), Some("abc".to_string()));
    }

    #[test]
    fn test_zero_cap_rejected() {
        assert!(PageOptions::new(Some(0), false).is_err());
        let opts = PageOptions::new(Some(3), true).unwrap();
        assert_eq!(opts.max_items, Some(3));
        assert!(!opts.auto_iterate);
    }
}
