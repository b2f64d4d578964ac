/// MessageEnvelope - addressing and framing of the outgoing digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEnvelope {
    pub recipient: String,
    pub subject: String,
    /// Opening line of the body; omitted when `None`
    pub intro: Option<String>,
}

impl MessageEnvelope {
    pub fn new(recipient: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            intro: None,
        }
    }

    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }
}
