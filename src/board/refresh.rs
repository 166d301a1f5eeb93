/// Orders overlapping refreshes.
///
/// Every refresh draws a token before its request goes out; a fetched
/// snapshot is applied only while its token is still the latest issued.
/// A slow early response can therefore never overwrite the columns
/// written by a later one.
#[derive(Debug, Default)]
pub struct RefreshSequence {
    latest: u64,
}

/// Proof of which refresh a snapshot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken(u64);

impl RefreshSequence {
    pub fn begin(&mut self) -> RefreshToken {
        self.latest += 1;
        RefreshToken(self.latest)
    }

    pub fn is_current(&self, token: RefreshToken) -> bool {
        token.0 == self.latest
    }
}
