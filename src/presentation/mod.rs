// プレゼンテーション層: ユーザーが見るもの・入力するもの
//
// - input: リネームと setup のプロンプト
// - output: 各ターゲットの結果とコマンドの集計
// - progress: 転送進捗バー

pub mod input;
pub mod output;
pub mod progress;
