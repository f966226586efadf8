// Normalización de rangos horarios "inicio-fin" a la forma canónica "HH:MM-HH:MM".
use std::fmt;

/// Resultado para cualquier rango ilegible.
pub const SENTINEL_SLOT: &str = "00:00-00:00";

const MINUTES_PER_DAY: u64 = 24 * 60;

/// Rango horario ya interpretado, en minutos desde medianoche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeRange {
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl TimeRange {
    pub const SENTINEL: TimeRange = TimeRange { start_minutes: 0, end_minutes: 0 };

    /// Interpretación tolerante: nunca falla, los rangos ilegibles dan `SENTINEL`.
    pub fn parse_lenient(raw: Option<&str>) -> TimeRange {
        let Some(raw) = raw else { return TimeRange::SENTINEL };
        if raw.is_empty() {
            return TimeRange::SENTINEL;
        }

        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == ':' || *c == '-')
            .collect();

        let parts: Vec<&str> = cleaned.split('-').collect();
        if parts.len() != 2 {
            return TimeRange::SENTINEL;
        }

        TimeRange {
            start_minutes: side_to_minutes(parts[0]),
            end_minutes: side_to_minutes(parts[1]),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_minutes(self.start_minutes),
            format_minutes(self.end_minutes)
        )
    }
}

/// "H:MM" -> minutos del día. Componentes ilegibles valen 0; horas 1..=5 se
/// asumen de la tarde (no hay clases entre la 1 y las 5 de la madrugada).
fn side_to_minutes(side: &str) -> u32 {
    let mut pieces = side.split(':');
    let mut hour = parse_component(pieces.next());
    let minute = parse_component(pieces.next());

    if (1..=5).contains(&hour) {
        hour += 12;
    }

    let total = hour.saturating_mul(60).saturating_add(minute);
    let hh = (total / 60) % 24;
    let mm = total % 60;
    (hh * 60 + mm) as u32
}

fn parse_component(p: Option<&str>) -> u64 {
    p.and_then(|s| s.parse::<u64>().ok()).unwrap_or(0)
}

fn format_minutes(m: u32) -> String {
    let m = u64::from(m) % MINUTES_PER_DAY;
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Normaliza un rango horario libre. Siempre devuelve algo con la forma
/// `HH:MM-HH:MM`; la entrada vacía, nula o mal formada da `SENTINEL_SLOT`.
///
/// ```
/// use slotgrid::algorithm::normalize_time_range;
/// assert_eq!(normalize_time_range(Some("1:00-3:00")), "13:00-15:00");
/// assert_eq!(normalize_time_range(Some("9:00 - 11:00")), "09:00-11:00");
/// assert_eq!(normalize_time_range(None), "00:00-00:00");
/// ```
pub fn normalize_time_range(raw: Option<&str>) -> String {
    TimeRange::parse_lenient(raw).to_string()
}

/// Minutos de inicio de una franja ya normalizada (la parte antes de `-`).
/// Se usa para ordenar el eje; lo ilegible cuenta como 0.
pub fn slot_start_minutes(slot: &str) -> u32 {
    let start = slot.split('-').next().unwrap_or("");
    let mut it = start.split(':');
    let h = it.next().and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0);
    let m = it.next().and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0);
    h.saturating_mul(60).saturating_add(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_to_minutes_rolls_minutes_into_hours() {
        // 10:75 -> 11:15
        assert_eq!(side_to_minutes("10:75"), 11 * 60 + 15);
        // 23:60 -> 00:00 del mismo día
        assert_eq!(side_to_minutes("23:60"), 0);
    }

    #[test]
    fn test_side_to_minutes_huge_values_do_not_overflow() {
        assert_eq!(side_to_minutes("99999999999999999999999:00"), 0);
        let m = side_to_minutes("4000000000:00");
        assert!(m < 24 * 60);
    }

    #[test]
    fn test_format_minutes_pads() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(9 * 60 + 5), "09:05");
    }
}
