// 要約パイプライン専用のカスタムエラー型定義

use std::path::PathBuf;
use thiserror::Error;

/// 要約処理固有のエラー型
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("ファイル読み込みエラー: {}", path.display())]
    FileAccessError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("要約エラー: 章 {chapter} - {message}")]
    SummarizationError { chapter: usize, message: String },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("クライアントエラー: {message}")]
    ClientError { message: String },
}

impl SummaryError {
    /// ファイル読み込みエラーの作成
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccessError {
            path: path.into(),
            source,
        }
    }

    /// 章単位の要約エラーの作成
    pub fn summarization(chapter: usize, message: impl Into<String>) -> Self {
        Self::SummarizationError {
            chapter,
            message: message.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// クライアントエラーの作成
    pub fn client(message: impl Into<String>) -> Self {
        Self::ClientError {
            message: message.into(),
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SummarizationError { .. } => ErrorSeverity::Medium,
            Self::FileAccessError { .. } | Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::ClientError { .. } => ErrorSeverity::High,
            Self::ChannelError { .. } | Self::TaskError { .. } => ErrorSeverity::Critical,
        }
    }

    /// 実行を継続できるエラーかどうか
    ///
    /// 章単位の要約失敗だけが回復可能で、その章にプレースホルダーが入る。
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::SummarizationError { .. })
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 警告レベル
    Medium,
    /// 要対応
    High,
    /// 内部不変条件の破綻
    Critical,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// 要約処理の結果型
pub type ProcessingResult<T> = std::result::Result<T, SummaryError>;

impl From<tokio::task::JoinError> for SummaryError {
    fn from(error: tokio::task::JoinError) -> Self {
        SummaryError::task(error)
    }
}
