// JobQueue - 章番号の配信キュー
//
// 全ジョブを事前に投入してから閉じる。容量は章数と同じなので投入はブロックしない。
// 複数ワーカーが同時に取り出しても、各章番号はちょうど1回だけ渡される。

use crate::core::{ProcessingResult, SummaryError};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TryRecvError, error::TrySendError};
use tokio::sync::Mutex;

/// 固定容量・クローズ可能な章番号キュー
#[derive(Debug)]
pub struct JobQueue {
    sender: Option<mpsc::Sender<usize>>,
    receiver: JobReceiver,
    capacity: usize,
    enqueued: usize,
}

/// ワーカー側の取り出しハンドル（クローンして共有する）
#[derive(Debug, Clone)]
pub struct JobReceiver {
    inner: Arc<Mutex<mpsc::Receiver<usize>>>,
}

impl JobQueue {
    /// 指定容量のキューを作成
    pub fn new(capacity: usize) -> Self {
        // tokioのチャンネルは容量0を受け付けない
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        Self {
            sender: Some(sender),
            receiver: JobReceiver {
                inner: Arc::new(Mutex::new(receiver)),
            },
            capacity,
            enqueued: 0,
        }
    }

    /// 0..countの章番号を投入して閉じたキューを作成
    pub fn preloaded(count: usize) -> ProcessingResult<Self> {
        let mut queue = Self::new(count);
        for index in 0..count {
            queue.enqueue(index)?;
        }
        queue.close();
        Ok(queue)
    }

    /// 章番号を投入（ブロックしない）
    ///
    /// 投入できるのは生成時の容量までで、取り出し済みの分は数え直さない。
    pub fn enqueue(&mut self, index: usize) -> ProcessingResult<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| SummaryError::channel(format!("クローズ済みのキューに章 {index} を投入しようとしました")))?;

        if self.enqueued >= self.capacity {
            return Err(SummaryError::channel(format!(
                "キュー容量 {} を超えて章 {index} を投入しようとしました",
                self.capacity
            )));
        }

        sender.try_send(index).map_err(|e| match e {
            TrySendError::Full(_) => SummaryError::channel(format!(
                "キュー容量 {} を超えて章 {index} を投入しようとしました",
                self.capacity
            )),
            TrySendError::Closed(_) => SummaryError::channel("ジョブキューの受信側が閉じています"),
        })?;
        self.enqueued += 1;
        Ok(())
    }

    /// キューを閉じる。2回目以降の呼び出しは何もしない
    ///
    /// 戻り値はこの呼び出しで閉じたかどうか。
    pub fn close(&mut self) -> bool {
        let was_open = !self.is_closed();
        self.sender = None;
        was_open
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_none()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// ワーカーに渡す取り出しハンドル
    pub fn receiver(&self) -> JobReceiver {
        self.receiver.clone()
    }
}

impl JobReceiver {
    /// 次の章番号を取り出す
    ///
    /// キューが空ならNone（もう仕事が無い）を即座に返し、待機はしない。
    pub async fn next_job(&self) -> Option<usize> {
        let mut rx = self.inner.lock().await;
        match rx.try_recv() {
            Ok(index) => Some(index),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
