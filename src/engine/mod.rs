// エンジン層 - 並列要約とオーケストレーション
// JobQueue → ワーカープール → Collector を組み合わせて高レベルな処理を提供

pub mod api;
pub mod collector;
pub mod job_queue;
mod pipeline;
pub mod summary_engine;
pub mod worker;

// 公開API - 主要エンジンクラス
pub use api::{create_default_summary_engine, create_quiet_summary_engine};
pub use collector::{collect_results, order_results, spawn_result_collector};
pub use job_queue::{JobQueue, JobReceiver};
pub use pipeline::SummaryPipeline;
pub use summary_engine::SummaryEngine;
pub use worker::{spawn_worker, spawn_workers, summarize_chapter};
