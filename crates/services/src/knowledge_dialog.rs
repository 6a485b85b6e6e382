use quiz_core::model::{QuestionRecord, RegionName};

/// Content shown after a correct answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeCard {
    pub region: RegionName,
    pub title: String,
    pub body: String,
    pub image: String,
}

#[derive(Clone, Debug, Default)]
pub struct KnowledgeDialog {
    card: Option<KnowledgeCard>,
}

impl KnowledgeDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, region: RegionName, title: String, record: &QuestionRecord) {
        self.card = Some(KnowledgeCard {
            region,
            title,
            body: record.knowledge().to_owned(),
            image: record.image().to_owned(),
        });
    }

    pub fn close(&mut self) -> bool {
        self.card.take().is_some()
    }

    #[must_use]
    pub fn card(&self) -> Option<&KnowledgeCard> {
        self.card.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.card.is_some()
    }
}
