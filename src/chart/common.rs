// The interval is k * 10 ** p. k will always be 1, 2, or 5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLineInterval {
    pub k: f64,
    pub p: i32,
}

impl GridLineInterval {
    pub fn value(self) -> f64 {
        self.k * 10f64.powi(self.p)
    }
}

/// Pick a grid line interval that yields roughly `target` lines between zero
/// and `max`. `max` must be positive.
pub fn compute_grid_line_interval(max: f64, target: usize) -> GridLineInterval {
    let raw = max / target.max(1) as f64;
    let p = raw.log10().floor() as i32;
    let k = raw / 10f64.powi(p);
    if k <= 1.0 {
        GridLineInterval { k: 1.0, p }
    } else if k <= 2.0 {
        GridLineInterval { k: 2.0, p }
    } else if k <= 5.0 {
        GridLineInterval { k: 5.0, p }
    } else {
        GridLineInterval { k: 1.0, p: p + 1 }
    }
}

/// Format a grid line value with just enough decimals for the interval.
pub fn format_grid_value(value: f64, interval: GridLineInterval) -> String {
    let precision = (-interval.p).max(0) as usize;
    format!("{:.*}", precision, value)
}

pub fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
