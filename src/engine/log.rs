/// Private per-player narratives plus the shared ground-truth log.
#[derive(Clone, Debug)]
pub(crate) struct NightLog {
    names: Vec<String>,
    private: Vec<Vec<String>>,
    shared: Vec<String>,
}

impl NightLog {
    pub(crate) fn new(names: Vec<String>) -> Self {
        let private = vec![Vec::new(); names.len()];
        Self {
            names,
            private,
            shared: Vec::new(),
        }
    }

    /// Same sentence for the player and the shared log, prefixed with
    /// the player's name.
    pub(crate) fn record(&mut self, player: usize, text: impl Into<String>) {
        let text = text.into();
        self.record_split(player, text.clone(), text);
    }

    /// `during` is what the player sees; `after` is the ground truth.
    pub(crate) fn record_split(
        &mut self,
        player: usize,
        during: impl AsRef<str>,
        after: impl AsRef<str>,
    ) {
        let name = &self.names[player];
        self.private[player].push(format!("{name} {}", during.as_ref()));
        self.shared.push(format!("{name} {}", after.as_ref()));
    }

    pub(crate) fn tell(&mut self, player: usize, text: impl Into<String>) {
        self.private[player].push(text.into());
    }

    pub(crate) fn broadcast(&mut self, during: impl Into<String>, after: impl Into<String>) {
        let during = during.into();
        for messages in &mut self.private {
            messages.push(during.clone());
        }
        self.shared.push(after.into());
    }

    pub(crate) fn append_shared(&mut self, text: impl Into<String>) {
        self.shared.push(text.into());
    }

    pub(crate) fn shared(&self) -> &[String] {
        &self.shared
    }

    pub(crate) fn private(&self, player: usize) -> &[String] {
        &self.private[player]
    }
}
