// octofit-backend/src/utils/validation/common.rs

//! 共通バリデーション定数
//!
//! DTOファイル間で重複するバリデーションルールを統一管理します。
//! 上限はマイグレーションのカラム長と揃えています。

use validator::ValidationError;

// =============================================================================
// バリデーション定数
// =============================================================================

/// チーム名・ユーザー名・ワークアウト名の制約
pub mod name {
    pub const MIN_LENGTH: u64 = 1;
    pub const MAX_LENGTH: u64 = 100;
}

/// メールアドレスの制約
pub mod email {
    pub const MAX_LENGTH: u64 = 254;
}

/// アクティビティ関連の制約
pub mod activity {
    pub const TYPE_MAX_LENGTH: u64 = 100;
    /// 分単位
    pub const DURATION_MIN: i32 = 0;
}

/// ワークアウト関連の制約
pub mod workout {
    pub const DESCRIPTION_MAX_LENGTH: u64 = 2000;
    pub const SUGGESTED_FOR_MAX_LENGTH: u64 = 100;
}

// =============================================================================
// カスタムバリデーション関数
// =============================================================================

/// 文字列が空白のみでないかをチェック
pub fn validate_not_empty_or_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("empty_or_whitespace");
        error.message = Some("Field cannot be empty or contain only whitespace".into());
        return Err(error);
    }
    Ok(())
}

// =============================================================================
// テスト
// =============================================================================
