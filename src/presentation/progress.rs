//! プレゼンテーション層: 転送進捗バー
//!
//! ドメイン層の`ProgressState`と indicatif のバーを組にする。
//! バーは状態を映すだけで、両方を進めるのはチャンクごとの転送ループ。

use crate::domain::progress::{Advance, ProgressState};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const BAR_TEMPLATE: &str =
    "{prefix:.cyan.bold} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

const SPINNER_TEMPLATE: &str =
    "{spinner:.blue} {prefix:.cyan.bold} [{elapsed_precise}] {bytes} ({bytes_per_sec})";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

pub struct TransferReporter {
    state: ProgressState,
    bar: ProgressBar,
}

impl TransferReporter {
    /// `label` を表示するレポーターを作成
    ///
    /// 総量が分かればバー、不明ならスピナーを描く。
    /// `visible == false` の場合は状態だけ保持し、何も描画しない。
    pub fn new(label: &str, total: Option<u64>, visible: bool) -> Self {
        let bar = match total {
            Some(len) => ProgressBar::new(len).with_style(bar_style()),
            None => ProgressBar::new_spinner().with_style(spinner_style()),
        };
        if !visible {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar.set_prefix(label.to_string());

        Self {
            state: ProgressState::new(total),
            bar,
        }
    }

    /// 状態を進め、実際に適用された差分だけバーを動かす
    pub fn update(&mut self, advance: Advance) {
        let delta = self.state.advance(advance);
        if delta > 0 {
            self.bar.inc(delta);
        }
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// バーを最終位置のまま残す
    pub fn finish(&self) {
        self.bar.finish();
    }

    /// 転送失敗時に描画を止める（最後の位置は表示したまま）
    pub fn abandon(&self) {
        tracing::debug!(completed = ?self.state.fraction(), "transfer abandoned");
        self.bar.abandon();
    }
}

fn bar_style() -> ProgressStyle {
    match ProgressStyle::with_template(BAR_TEMPLATE) {
        Ok(style) => style.progress_chars(PB_CHARS),
        Err(_) => ProgressStyle::default_bar(),
    }
}

fn spinner_style() -> ProgressStyle {
    match ProgressStyle::with_template(SPINNER_TEMPLATE) {
        Ok(style) => style.tick_chars(TICK),
        Err(_) => ProgressStyle::default_spinner(),
    }
}
