use super::*;

/// Page arithmetic for article listings. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
  pub current_page: usize,
  pub page_size: usize,
  pub total_pages: usize,
}

impl Pagination {
  #[must_use]
  pub fn is_current(&self, page: usize) -> bool {
    page == self.current_page
  }

  /// Number of items to request for the current page.
  #[must_use]
  pub fn limit(&self) -> usize {
    self.page_size
  }

  /// Builds pagination for `total_items`, clamping `current_page` into
  /// range. An empty listing still has one page.
  pub fn new(
    current_page: usize,
    total_items: usize,
    page_size: usize,
  ) -> Result<Self> {
    if page_size == 0 {
      return Err(Error::ZeroPageSize);
    }

    let total_pages = total_items.div_ceil(page_size).max(1);

    Ok(Self {
      current_page: current_page.clamp(1, total_pages),
      page_size,
      total_pages,
    })
  }

  #[must_use]
  pub fn next(&self) -> Option<usize> {
    (self.current_page < self.total_pages).then(|| self.current_page + 1)
  }

  pub fn pages(&self) -> impl Iterator<Item = usize> {
    1..=self.total_pages
  }

  #[must_use]
  pub fn previous(&self) -> Option<usize> {
    (self.current_page > 1).then(|| self.current_page - 1)
  }

  /// Number of items preceding the current page.
  #[must_use]
  pub fn skip(&self) -> usize {
    (self.current_page - 1) * self.page_size
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn middle_page_links_both_ways() {
    let pagination = Pagination::new(2, 25, 10).unwrap();

    assert_eq!(pagination.total_pages, 3);
    assert_eq!(pagination.previous(), Some(1));
    assert_eq!(pagination.next(), Some(3));
    assert_eq!(pagination.skip(), 10);
    assert_eq!(pagination.limit(), 10);
    assert_eq!(pagination.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(pagination.is_current(2));
  }

  #[test]
  fn edges_have_no_neighbors() {
    let first = Pagination::new(1, 20, 10).unwrap();
    let last = Pagination::new(2, 20, 10).unwrap();

    assert_eq!(first.previous(), None);
    assert_eq!(last.next(), None);
  }

  #[test]
  fn out_of_range_pages_are_clamped() {
    assert_eq!(Pagination::new(0, 20, 10).unwrap().current_page, 1);
    assert_eq!(Pagination::new(9, 20, 10).unwrap().current_page, 2);
  }

  #[test]
  fn empty_listing_has_one_page() {
    let pagination = Pagination::new(1, 0, 10).unwrap();

    assert_eq!(pagination.total_pages, 1);
    assert_eq!(pagination.next(), None);
    assert_eq!(pagination.skip(), 0);
  }

  #[test]
  fn zero_page_size_is_rejected() {
    assert!(matches!(Pagination::new(1, 5, 0), Err(Error::ZeroPageSize)));
  }

  #[test]
  fn serializes_for_templates() {
    insta::assert_json_snapshot!(Pagination::new(3, 41, 20).unwrap(), @r#"
    {
      "currentPage": 3,
      "pageSize": 20,
      "totalPages": 3
    }
    "#);
  }
}
