// ドメイン層: ファイル名決定、進捗計算、転送結果、入力ルール
// ネットワークI/Oは行わない

pub mod error;
pub mod filename;
pub mod outcome;
pub mod progress;
pub mod validator;
