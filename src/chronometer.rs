use std::time::SystemTime;

#[derive(Clone, Copy)]
pub struct Chronometer {
    start: SystemTime,
}

impl Chronometer {
    pub fn new() -> Self {
        Self { start: SystemTime::now() }
    }

    pub fn elapsed(&self) -> String {
        let elapsed = SystemTime::now().duration_since(self.start).unwrap_or_default().as_millis();
        format_millis(elapsed)
    }
}

impl Default for Chronometer {
    fn default() -> Self {
        Self::new()
    }
}

fn format_millis(elapsed: u128) -> String {
    format!("{:02}:{:02}.{:03}", elapsed / 60000, (elapsed % 60000) / 1000, elapsed % 1000)
}
