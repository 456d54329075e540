use std::fmt;

use log::*;

use crate::record::angle::{Angle, Axis};
use crate::wire::*;


/// A **LOC** _(location)_ record, which points to a location on Earth using
/// its latitude, longitude, and altitude.
///
/// # References
///
/// - [RFC 1876](https://tools.ietf.org/html/rfc1876) — A Means for Expressing Location Information in the Domain Name System (January 1996)
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct LOC {

    /// The diameter of a sphere enclosing the entity at the location, as a
    /// measure of its size.
    pub size: Size,

    /// The diameter of the “circle of error” that this location could be in.
    pub horizontal_precision: Size,

    /// The amount of vertical space that this location could be in.
    pub vertical_precision: Size,

    /// The latitude of the centre of the sphere.
    pub latitude: Angle,

    /// The longitude of the centre of the sphere.
    pub longitude: Angle,

    /// The altitude of the centre of the sphere, measured in centimetres
    /// above the GPS reference spheroid.
    pub altitude: i64,
}

/// A measurement in centimetres, stored as a base and an exponent, with
/// both of them from 0 to 9.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Size {

    /// The number that gets multiplied.
    pub base: u8,

    /// The power of ten that it gets multiplied by.
    pub power_of_ten: u8,
}

/// The only version of the LOC record layout.
const LOC_VERSION: u8 = 0;

/// The raw latitude and longitude value for the equator and prime meridian.
const ANGLE_ORIGIN: i64 = 1 << 31;

/// The raw altitude value for the reference spheroid, which is 100,000
/// metres above the base the altitude is measured from.
const ALTITUDE_ORIGIN: i64 = 10_000_000;


impl LOC {

    /// The altitude, in metres.
    #[allow(clippy::cast_precision_loss)]
    pub fn altitude_metres(&self) -> f64 {
        self.altitude as f64 / 100.0
    }
}

impl Size {

    /// Splits the number in a size byte into its base and power of ten.
    fn from_u8(bits: u8, field: &'static str) -> Result<Self, WireError> {
        let size = Self { base: bits >> 4, power_of_ten: bits & 0b_0000_1111 };
        size.check(field)?;
        Ok(size)
    }

    fn to_u8(self, field: &'static str) -> Result<u8, WireError> {
        self.check(field)?;
        Ok((self.base << 4) | self.power_of_ten)
    }

    /// Neither digit of a size may go above 9.
    fn check(self, field: &'static str) -> Result<(), WireError> {
        if self.base > 9 || self.power_of_ten > 9 {
            warn!("{} {:?} is out of range", field, self);
            return Err(WireError::FieldOutOfRange(field));
        }

        Ok(())
    }

    /// This size in centimetres.
    pub fn centimetres(self) -> u64 {
        u64::from(self.base) * 10_u64.pow(u32::from(self.power_of_ten))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.base, self.power_of_ten)
    }
}


impl Wire for LOC {
    const NAME: &'static str = "LOC";
    const RR_TYPE: u16 = 29;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        if stated_length != 16 {
            warn!("Length is incorrect (record length {:?}, but should be sixteen)", stated_length);
            let mandated_length = MandatedLength::Exactly(16);
            return Err(WireError::WrongRecordLength { stated_length, mandated_length });
        }

        let version = c.read_u8()?;
        trace!("Parsed version -> {:?}", version);

        if version != LOC_VERSION {
            warn!("LOC version is not 0");
            return Err(WireError::WrongVersion {
                stated_version: version,
                maximum_supported_version: LOC_VERSION,
            });
        }

        let size = Size::from_u8(c.read_u8()?, "LOC size")?;
        trace!("Parsed size -> {:?}", size);

        let horizontal_precision = Size::from_u8(c.read_u8()?, "LOC horizontal precision")?;
        trace!("Parsed horizontal precision -> {:?}", horizontal_precision);

        let vertical_precision = Size::from_u8(c.read_u8()?, "LOC vertical precision")?;
        trace!("Parsed vertical precision -> {:?}", vertical_precision);

        let latitude_bits = c.read_u32::<BigEndian>()?;
        trace!("Parsed latitude -> {:?}", latitude_bits);

        let latitude = Angle::from_thousandths(i64::from(latitude_bits) - ANGLE_ORIGIN, Axis::Latitude)
            .ok_or(WireError::FieldOutOfRange("LOC latitude"))?;

        let longitude_bits = c.read_u32::<BigEndian>()?;
        trace!("Parsed longitude -> {:?}", longitude_bits);

        let longitude = Angle::from_thousandths(i64::from(longitude_bits) - ANGLE_ORIGIN, Axis::Longitude)
            .ok_or(WireError::FieldOutOfRange("LOC longitude"))?;

        let altitude_bits = c.read_u32::<BigEndian>()?;
        trace!("Parsed altitude -> {:?}", altitude_bits);

        let altitude = i64::from(altitude_bits) - ALTITUDE_ORIGIN;

        Ok(Self {
            size, horizontal_precision, vertical_precision, latitude, longitude, altitude,
        })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        let latitude = self.latitude.to_thousandths(Axis::Latitude)
            .ok_or(WireError::FieldOutOfRange("LOC latitude"))?;

        let longitude = self.longitude.to_thousandths(Axis::Longitude)
            .ok_or(WireError::FieldOutOfRange("LOC longitude"))?;

        let altitude = u32::try_from(self.altitude + ALTITUDE_ORIGIN)
            .map_err(|_| WireError::FieldOutOfRange("LOC altitude"))?;

        bytes.push(LOC_VERSION);
        bytes.push(self.size.to_u8("LOC size")?);
        bytes.push(self.horizontal_precision.to_u8("LOC horizontal precision")?);
        bytes.push(self.vertical_precision.to_u8("LOC vertical precision")?);
        bytes.write_u32::<BigEndian>(angle_bits(latitude))?;
        bytes.write_u32::<BigEndian>(angle_bits(longitude))?;
        bytes.write_u32::<BigEndian>(altitude)?;
        Ok(())
    }
}

/// Offsets a signed angle so it can be written. Any angle that made it
/// through `Angle::to_thousandths` fits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn angle_bits(thousandths: i64) -> u32 {
    (ANGLE_ORIGIN + thousandths) as u32
}
