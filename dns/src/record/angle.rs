use std::fmt;


/// A latitude or longitude, split into degrees, minutes, and seconds, with
/// the seconds having a precision of thousandths.
///
/// These appear in the **LOC** and **GPOS** record types, which encode them
/// very differently.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Angle {

    /// The number of whole degrees, up to 90 for a latitude or 180 for a
    /// longitude.
    pub degrees: u8,

    /// The number of whole minutes, from 0 to 59.
    pub minutes: u8,

    /// The number of whole seconds, from 0 to 59.
    pub seconds: u8,

    /// The thousandths of a second, from 0 to 999.
    pub fraction: u16,

    /// Which side of the equator or prime meridian this is on.
    pub hemisphere: Hemisphere,
}

/// The direction an angle points in.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Hemisphere {

    /// North of the equator.
    North,

    /// South of the equator.
    South,

    /// East of the prime meridian.
    East,

    /// West of the prime meridian.
    West,
}

/// Whether an angle is a latitude or a longitude.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub(crate) enum Axis {
    Latitude,
    Longitude,
}

const THOUSANDTHS_PER_SECOND: i64 = 1000;
const THOUSANDTHS_PER_MINUTE: i64 = 60 * THOUSANDTHS_PER_SECOND;

/// The number of thousandths of an arcsecond in one degree.
pub(crate) const THOUSANDTHS_PER_DEGREE: i64 = 60 * THOUSANDTHS_PER_MINUTE;


impl Axis {
    fn max_degrees(self) -> i64 {
        match self {
            Self::Latitude   => 90,
            Self::Longitude  => 180,
        }
    }

    /// The hemispheres for positive and negative values, in that order.
    fn hemispheres(self) -> (Hemisphere, Hemisphere) {
        match self {
            Self::Latitude   => (Hemisphere::North, Hemisphere::South),
            Self::Longitude  => (Hemisphere::East,  Hemisphere::West),
        }
    }
}


impl Angle {

    /// Builds an angle from a signed number of thousandths of an arcsecond,
    /// with positive numbers being north or east. Returns `None` if the
    /// angle is past the pole or the antimeridian.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn from_thousandths(value: i64, axis: Axis) -> Option<Self> {
        let magnitude = value.checked_abs()?;
        if magnitude > axis.max_degrees() * THOUSANDTHS_PER_DEGREE {
            return None;
        }

        let (positive, negative) = axis.hemispheres();
        let hemisphere = if value < 0 { negative } else { positive };

        // every component is in range of its type after the check above
        Some(Self {
            degrees:   (magnitude / THOUSANDTHS_PER_DEGREE) as u8,
            minutes:   (magnitude % THOUSANDTHS_PER_DEGREE / THOUSANDTHS_PER_MINUTE) as u8,
            seconds:   (magnitude % THOUSANDTHS_PER_MINUTE / THOUSANDTHS_PER_SECOND) as u8,
            fraction:  (magnitude % THOUSANDTHS_PER_SECOND) as u16,
            hemisphere,
        })
    }

    /// Converts this angle back into a signed number of thousandths of an
    /// arcsecond. Returns `None` if any of its components are out of range,
    /// or if its hemisphere belongs to the other axis.
    pub(crate) fn to_thousandths(self, axis: Axis) -> Option<i64> {
        if self.minutes >= 60 || self.seconds >= 60 || self.fraction >= 1000 {
            return None;
        }

        let magnitude = i64::from(self.degrees) * THOUSANDTHS_PER_DEGREE
                      + i64::from(self.minutes) * THOUSANDTHS_PER_MINUTE
                      + i64::from(self.seconds) * THOUSANDTHS_PER_SECOND
                      + i64::from(self.fraction);

        if magnitude > axis.max_degrees() * THOUSANDTHS_PER_DEGREE {
            return None;
        }

        match axis.hemispheres() {
            (positive, _) if self.hemisphere == positive  => Some(magnitude),
            (_, negative) if self.hemisphere == negative  => Some(-magnitude),
            _                                             => None,
        }
    }

    /// Whether this angle is south of the equator or west of the prime
    /// meridian.
    pub fn is_negative(self) -> bool {
        matches!(self.hemisphere, Hemisphere::South | Hemisphere::West)
    }

    /// The seconds, including their fractional part.
    pub fn seconds_decimal(self) -> f64 {
        f64::from(self.seconds) + f64::from(self.fraction) / 1000.0
    }

    /// The angle as a signed number of degrees, negative to the south or
    /// west.
    pub fn decimal_degrees(self) -> f64 {
        let magnitude = f64::from(self.degrees)
                      + f64::from(self.minutes) / 60.0
                      + self.seconds_decimal() / 3600.0;

        if self.is_negative() { -magnitude } else { magnitude }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}.{:03} {}", self.degrees, self.minutes, self.seconds, self.fraction, self.hemisphere)
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North  => write!(f, "N"),
            Self::South  => write!(f, "S"),
            Self::East   => write!(f, "E"),
            Self::West   => write!(f, "W"),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_components() {
        let angle = Angle::from_thousandths(185_412_748, Axis::Latitude).unwrap();

        assert_eq!(angle, Angle {
            degrees: 51,
            minutes: 30,
            seconds: 12,
            fraction: 748,
            hemisphere: Hemisphere::North,
        });
        assert_eq!(angle.to_string(), "51 30 12.748 N");
    }

    #[test]
    fn negative_longitude() {
        let angle = Angle::from_thousandths(-460_500, Axis::Longitude).unwrap();

        assert_eq!(angle, Angle {
            degrees: 0,
            minutes: 7,
            seconds: 40,
            fraction: 500,
            hemisphere: Hemisphere::West,
        });
        assert_eq!(angle.to_thousandths(Axis::Longitude), Some(-460_500));
    }

    #[test]
    fn zero_is_positive() {
        let angle = Angle::from_thousandths(0, Axis::Longitude).unwrap();
        assert_eq!(angle.hemisphere, Hemisphere::East);
    }

    #[test]
    fn past_the_pole() {
        assert_eq!(Angle::from_thousandths(90 * THOUSANDTHS_PER_DEGREE + 1, Axis::Latitude), None);
        assert!(Angle::from_thousandths(90 * THOUSANDTHS_PER_DEGREE + 1, Axis::Longitude).is_some());
    }

    #[test]
    fn wrong_axis() {
        let angle = Angle { degrees: 1, minutes: 0, seconds: 0, fraction: 0, hemisphere: Hemisphere::East };
        assert_eq!(angle.to_thousandths(Axis::Latitude), None);
    }

    #[test]
    fn components_out_of_range() {
        let angle = Angle { degrees: 1, minutes: 60, seconds: 0, fraction: 0, hemisphere: Hemisphere::North };
        assert_eq!(angle.to_thousandths(Axis::Latitude), None);
    }

    #[test]
    fn decimals() {
        let angle = Angle { degrees: 10, minutes: 30, seconds: 36, fraction: 500, hemisphere: Hemisphere::South };

        assert_eq!(angle.seconds_decimal(), 36.5);
        assert!((angle.decimal_degrees() - -10.510_138_888).abs() < 1e-6);
    }
}
