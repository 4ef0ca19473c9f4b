use super::CharFilter;

/// Unicode lowercasing of the whole text: `Đ` becomes `đ`, `Ả` becomes `ả`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseCharFilter;

impl CharFilter for LowercaseCharFilter {
    fn apply(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vietnamese_and_cjk() {
        assert_eq!(LowercaseCharFilter.apply("Trống Đồng ĐÔNG SƠN"), "trống đồng đông sơn");
        assert_eq!(LowercaseCharFilter.apply("Nhà NGUYỄN"), "nhà nguyễn");
        assert_eq!(LowercaseCharFilter.apply("仏教"), "仏教");
    }
}
