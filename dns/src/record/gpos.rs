use log::*;

use crate::record::angle::{Angle, Axis, THOUSANDTHS_PER_DEGREE};
use crate::record::utils::{check_length, read_character_string, string_length, write_character_string};
use crate::wire::*;


/// A **GPOS** _(geographical position)_ record, which is the predecessor of
/// the LOC record. It holds its three fields as decimal numbers in text.
///
/// # References
///
/// - [RFC 1712](https://tools.ietf.org/html/rfc1712) — DNS Encoding of
///   Geographical Location (November 1994)
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct GPOS {

    /// The longitude, which is written as a number of degrees, negative to
    /// the west of the prime meridian.
    pub longitude: Angle,

    /// The latitude, which is written as a number of degrees, negative to
    /// the south of the equator.
    pub latitude: Angle,

    /// The altitude, in metres.
    pub altitude: f64,
}

impl Wire for GPOS {
    const NAME: &'static str = "GPOS";
    const RR_TYPE: u16 = 27;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let longitude_text = read_character_string(c)?;
        let latitude_text = read_character_string(c)?;
        let altitude_text = read_character_string(c)?;

        let length_after_labels = string_length(&longitude_text)
            + string_length(&latitude_text)
            + string_length(&altitude_text);

        check_length(stated_length, length_after_labels)?;

        let longitude = parse_degrees(&longitude_text, Axis::Longitude)
            .ok_or(WireError::FieldOutOfRange("GPOS longitude"))?;
        trace!("Parsed longitude -> {:?}", longitude);

        let latitude = parse_degrees(&latitude_text, Axis::Latitude)
            .ok_or(WireError::FieldOutOfRange("GPOS latitude"))?;
        trace!("Parsed latitude -> {:?}", latitude);

        let altitude = parse_altitude(&altitude_text)
            .ok_or(WireError::FieldOutOfRange("GPOS altitude"))?;
        trace!("Parsed altitude -> {:?}", altitude);

        Ok(Self { longitude, latitude, altitude })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        let longitude = format_degrees(self.longitude, Axis::Longitude)
            .ok_or(WireError::FieldOutOfRange("GPOS longitude"))?;

        let latitude = format_degrees(self.latitude, Axis::Latitude)
            .ok_or(WireError::FieldOutOfRange("GPOS latitude"))?;

        if ! self.altitude.is_finite() {
            return Err(WireError::FieldOutOfRange("GPOS altitude"));
        }

        let altitude = self.altitude.to_string();

        write_character_string(bytes, "GPOS longitude", longitude.as_bytes())?;
        write_character_string(bytes, "GPOS latitude", latitude.as_bytes())?;
        write_character_string(bytes, "GPOS altitude", altitude.as_bytes())
    }
}


/// Reads a decimal number of degrees into an angle, rounding to the nearest
/// thousandth of an arcsecond.
fn parse_degrees(text: &[u8], axis: Axis) -> Option<Angle> {
    let text = std::str::from_utf8(text).ok()?.trim();

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest)  => (true, rest),
        None        => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    if ! whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    if whole > 180 {
        return None;
    }

    // Digits past the eighteenth make no difference once rounded.
    let fraction = &fraction[.. fraction.len().min(18)];
    let scale = 10_u128.pow(u32::try_from(fraction.len()).ok()?);
    let fraction: u128 = if fraction.is_empty() { 0 } else { fraction.parse().ok()? };

    let per_degree = u128::try_from(THOUSANDTHS_PER_DEGREE).ok()?;
    let thousandths = ((whole * scale + fraction) * per_degree * 2 + scale) / (2 * scale);
    let thousandths = i64::try_from(thousandths).ok()?;

    Angle::from_thousandths(if negative { -thousandths } else { thousandths }, axis)
}

/// Writes an angle as a decimal number of degrees. Seven decimal places is
/// enough for `parse_degrees` to get the same angle back.
fn format_degrees(angle: Angle, axis: Axis) -> Option<String> {
    let thousandths = angle.to_thousandths(axis)?;

    // One thousandth of an arcsecond is 25/9 units of the seventh decimal
    // place of a degree.
    let units = (thousandths.unsigned_abs() * 50 + 9) / 18;
    let sign = if thousandths < 0 { "-" } else { "" };

    Some(format!("{}{}.{:07}", sign, units / 10_000_000, units % 10_000_000))
}

fn parse_altitude(text: &[u8]) -> Option<f64> {
    std::str::from_utf8(text).ok()?
        .trim()
        .parse::<f64>().ok()
        .filter(|altitude| altitude.is_finite())
}
