use crate::datepicker::format::translate_format;
use crate::dom::document::FormDocument;
use crate::error::FormError;

/// A calendar date as the widget sees it. Ordering is (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FormDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl FormDate {
    /// `None` for impossible dates (month 13, February 30, ...).
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day < 1 || day > days_in_month(year, month) {
            return None;
        }
        Some(FormDate { year, month, day })
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A date-picker bound to one form element, with a translated format and an
/// optional allowed range.
#[derive(Debug, Clone)]
pub struct DatePicker {
    pub element: String,
    pub format: String,
    pub min: Option<FormDate>,
    pub max: Option<FormDate>,
}

impl DatePicker {
    /// Bind to a named element, translating the PHP-style format up front.
    pub fn bind(doc: &FormDocument, element: &str, php_format: &str) -> Result<Self, FormError> {
        doc.element(element)?;
        Ok(DatePicker {
            element: element.to_string(),
            format: translate_format(php_format)?,
            min: None,
            max: None,
        })
    }

    pub fn with_range(mut self, min: Option<FormDate>, max: Option<FormDate>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Take typed text from the user. Valid in-range text is written to the
    /// element and clears its invalid marker; malformed or out-of-range text
    /// only sets the marker — nothing propagates to the caller.
    pub fn read_input(
        &self,
        doc: &mut FormDocument,
        text: &str,
    ) -> Result<Option<FormDate>, FormError> {
        let el = doc.element_mut(&self.element)?;
        match parse_date(text, &self.format) {
            Some(date) if self.in_range(date) => {
                el.value = text.to_string();
                el.invalid = false;
                Ok(Some(date))
            }
            _ => {
                el.invalid = true;
                Ok(None)
            }
        }
    }

    fn in_range(&self, date: FormDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }
}

/// Parse `text` against widget format tokens: `y` runs read the year,
/// `m`/`n` the month, `d`/`j` the day, `MM` a full month name; everything
/// else must match literally.
pub fn parse_date(text: &str, format: &str) -> Option<FormDate> {
    let fmt: Vec<char> = format.chars().collect();
    let txt: Vec<char> = text.chars().collect();
    let (mut fi, mut ti) = (0usize, 0usize);
    let (mut year, mut month, mut day) = (None, None, None);

    while fi < fmt.len() {
        match fmt[fi] {
            'M' if fmt.get(fi + 1) == Some(&'M') => {
                let (m, used) = match_month_name(&txt[ti..])?;
                month = Some(m);
                ti += used;
                fi += 2;
            }
            'y' => {
                let run = token_run(&fmt[fi..], 'y');
                let (value, used) = read_digits(&txt[ti..], 4)?;
                year = Some(value as i32);
                ti += used;
                fi += run;
            }
            'm' | 'n' => {
                let (value, used) = read_digits(&txt[ti..], 2)?;
                month = Some(value);
                ti += used;
                fi += 1;
            }
            'd' | 'j' => {
                let (value, used) = read_digits(&txt[ti..], 2)?;
                day = Some(value);
                ti += used;
                fi += 1;
            }
            literal => {
                if txt.get(ti) != Some(&literal) {
                    return None;
                }
                ti += 1;
                fi += 1;
            }
        }
    }

    if ti != txt.len() {
        return None;
    }
    FormDate::new(year?, month?, day?)
}

fn token_run(fmt: &[char], token: char) -> usize {
    fmt.iter().take_while(|&&c| c == token).count()
}

/// Read one to `max` leading digits, returning the value and chars consumed.
fn read_digits(txt: &[char], max: usize) -> Option<(u32, usize)> {
    let used = txt
        .iter()
        .take(max)
        .take_while(|c| c.is_ascii_digit())
        .count();
    if used == 0 {
        return None;
    }
    let value: u32 = txt[..used].iter().collect::<String>().parse().ok()?;
    Some((value, used))
}

fn match_month_name(txt: &[char]) -> Option<(u32, usize)> {
    let text: String = txt.iter().collect();
    for (index, name) in MONTH_NAMES.iter().enumerate() {
        if let Some(prefix) = text.get(..name.len()) {
            if prefix.eq_ignore_ascii_case(name) {
                return Some((index as u32 + 1, name.chars().count()));
            }
        }
    }
    None
}
