use custledger_core::Customer;

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 20;
const CODE_WIDTH: usize = 10;
pub const DEFAULT_ADDRESS_WIDTH: usize = 30;

/// Cuts `text` to at most `max_chars` characters, marking the cut with `…`.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[derive(Clone, Debug)]
pub struct Table {
    address_width: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS_WIDTH)
    }
}

impl Table {
    pub fn new(address_width: usize) -> Self {
        Self {
            address_width: address_width.max(1),
        }
    }

    fn rule(&self) -> String {
        // Each column adds two spaces of padding plus one border.
        let inner = ID_WIDTH + NAME_WIDTH + CODE_WIDTH + self.address_width + 4 * 3 + 1;
        "-".repeat(inner)
    }

    fn row(&self, id: &str, name: &str, code: &str, address: &str) -> String {
        format!(
            "| {id:>iw$} | {name:<nw$} | {code:<cw$} | {address:<aw$} |",
            iw = ID_WIDTH,
            nw = NAME_WIDTH,
            cw = CODE_WIDTH,
            aw = self.address_width
        )
    }

    pub fn render(&self, customers: &[Customer]) -> String {
        let rule = self.rule();
        let mut lines = Vec::with_capacity(customers.len() + 4);
        lines.push(rule.clone());
        lines.push(self.row("Id", "Name", "Code", "Address"));
        lines.push(rule.clone());
        for c in customers {
            lines.push(self.row(
                &c.id().to_string(),
                &truncate_chars(c.name(), NAME_WIDTH),
                c.code(),
                &truncate_chars(c.address().unwrap_or(""), self.address_width),
            ));
        }
        lines.push(rule);
        lines.join("\n")
    }
}
