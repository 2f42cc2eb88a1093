//! ドメイン層: 転送進捗の状態
//!
//! 1回のアップロードまたはダウンロードのバイト数カウンタ。
//! 転送開始時に作られ、チャンクごとに進み、終了時に破棄される。

/// 転送ループからの進捗更新1回分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// 前回の更新からの転送バイト数
    By(u64),
    /// 転送開始からの累計バイト数
    To(u64),
}

/// 転送済みバイト数と（分かっていれば）総量
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    transferred: u64,
    total: Option<u64>,
}

impl ProgressState {
    pub fn new(total: Option<u64>) -> Self {
        Self {
            transferred: 0,
            total,
        }
    }

    /// 更新を適用し、実際に適用した差分を返す
    ///
    /// 後退はしない。現在値より小さい累計値を渡した場合の差分は0。
    pub fn advance(&mut self, advance: Advance) -> u64 {
        let delta = match advance {
            Advance::By(delta) => delta,
            Advance::To(absolute) => absolute.saturating_sub(self.transferred),
        };
        self.transferred = self.transferred.saturating_add(delta);
        delta
    }

    pub fn transferred(&self) -> u64 {
        self.transferred
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// 完了率（`0.0..=1.0`）。総量が不明なら `None`
    pub fn fraction(&self) -> Option<f64> {
        let total = self.total?;
        if total == 0 {
            return Some(1.0);
        }
        Some((self.transferred as f64 / total as f64).min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_by_delta() {
        let mut state = ProgressState::new(Some(100));
        assert_eq!(state.advance(Advance::By(30)), 30);
        assert_eq!(state.advance(Advance::By(20)), 20);
        assert_eq!(state.transferred(), 50);
        assert_eq!(state.fraction(), Some(0.5));
    }

    #[test]
    fn test_advance_to_absolute() {
        let mut state = ProgressState::new(Some(100));
        assert_eq!(state.advance(Advance::To(40)), 40);
        assert_eq!(state.advance(Advance::To(75)), 35);
        assert_eq!(state.transferred(), 75);
    }

    #[test]
    fn test_stale_absolute_never_goes_backwards() {
        let mut state = ProgressState::new(None);
        state.advance(Advance::To(500));
        assert_eq!(state.advance(Advance::To(200)), 0);
        assert_eq!(state.transferred(), 500);
    }

    #[test]
    fn test_unknown_total_has_no_fraction() {
        let mut state = ProgressState::new(None);
        state.advance(Advance::By(1024));
        assert_eq!(state.total(), None);
        assert_eq!(state.fraction(), None);
    }

    #[test]
    fn test_fraction_is_clamped() {
        let mut state = ProgressState::new(Some(10));
        state.advance(Advance::By(25));
        assert_eq!(state.fraction(), Some(1.0));

        let empty = ProgressState::new(Some(0));
        assert_eq!(empty.fraction(), Some(1.0));
    }
}
