//! プレゼンテーション層: 対話入力
//!
//! 端末上で1行ずつ質問する。アップロード前のリネーム確認と、
//! `anon setup` のエンドポイント入力を担当します。

use crate::transfer::pipeline::{RenameDecision, RenamePrompter};
use anyhow::{Context, Result};
use std::io::{self, BufRead, StdinLock, Stderr, Write};
use std::path::Path;

/// 「はい」とみなす回答（前後の空白を除き、大文字小文字を区別しない）
const AFFIRMATIVE: &[&str] = &["yes", "y", "ye", ""];

/// `yes`、`y`、`ye`、空の回答なら true
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}

/// `output` に質問を書き、回答ごとに `input` から1行読む
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<StdinLock<'static>, Stderr> {
    /// プロンプトは stderr へ（stdout は結果専用）
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read answer from input")?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// 新しいアップロード先を尋ねる。空の回答は現状維持を意味する。
    pub fn ask_custom_url(&mut self) -> Result<Option<String>> {
        writeln!(
            self.output,
            "If you don't want to change the custom URL, just press Enter."
        )?;
        let url = self.ask("Enter custom URL (or leave blank): ")?;
        let url = url.trim();
        Ok((!url.is_empty()).then(|| url.to_string()))
    }
}

impl<R: BufRead, W: Write> RenamePrompter for ConsolePrompter<R, W> {
    fn decide(&mut self, path: &Path) -> Result<RenameDecision> {
        let answer = self.ask(&format!(
            "Do you want change filename {} [Y/n]: ",
            path.display()
        ))?;
        if !is_affirmative(&answer) {
            return Ok(RenameDecision::Keep);
        }

        let name = self.ask("Enter new file name with extension: ")?;
        Ok(RenameDecision::Rename(name))
    }
}
