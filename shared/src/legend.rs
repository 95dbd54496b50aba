use crate::year::Year;

pub fn legend_text(year: Year) -> String {
    format!("Year: {year}")
}
