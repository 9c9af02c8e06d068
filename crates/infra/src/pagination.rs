/// Limit/offset pair for list queries. The collection sizes in this domain
/// are small (dozens of clubs), so the default page is generous.
#[derive(Debug, Clone, Copy)]
pub struct LimitOffset {
    pub limit: i64,
    pub offset: i64,
}

impl Default for LimitOffset {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
        }
    }
}

impl LimitOffset {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.max(0),
            offset: offset.max(0),
        }
    }
}
