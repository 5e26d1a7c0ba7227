use crate::api::{ApiResult, WellnessApi};
use crate::types::Quest;
use tracing::warn;

pub const QUEST_LOADING_TEXT: &str = "Loading your quest...";
pub const QUEST_FAILURE_TEXT: &str = "Failed to fetch quest.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuestStatus {
    #[default]
    Loading,
    Ready(Quest),
    Failed,
}

/// Today's quest and whether the user ticked it off. Nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestBoard {
    status: QuestStatus,
    completed: bool,
}

impl QuestBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &QuestStatus {
        &self.status
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn headline(&self) -> &str {
        match &self.status {
            QuestStatus::Loading => QUEST_LOADING_TEXT,
            QuestStatus::Ready(quest) => &quest.text,
            QuestStatus::Failed => QUEST_FAILURE_TEXT,
        }
    }

    pub fn apply(&mut self, outcome: ApiResult<Quest>) {
        self.status = match outcome {
            Ok(quest) => QuestStatus::Ready(quest),
            Err(err) => {
                warn!(error = %err, "failed to fetch today's quest");
                QuestStatus::Failed
            }
        };
    }

    /// Mark the quest done. Returns `false` if it already was.
    pub fn complete(&mut self) -> bool {
        !std::mem::replace(&mut self.completed, true)
    }

    pub async fn fetch<A>(&mut self, api: &A)
    where
        A: WellnessApi + ?Sized,
    {
        let outcome = api.today_quest().await;
        self.apply(outcome);
    }
}
