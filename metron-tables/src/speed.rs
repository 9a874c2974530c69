//! Speed units, base unit metre per second.
//!
//! Each scale is "units per m/s", i.e. seconds per time unit divided by
//! metres per length unit.

use metron_core::UnitTable;

pub const BASE_UNIT: &str = "m/s";

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const JULIAN_YEAR: f64 = 365.25 * DAY;

const INCH: f64 = 0.0254;
const FOOT: f64 = 0.3048;
const YARD: f64 = 0.9144;
const FURLONG: f64 = 201.168;
const MILE: f64 = 1_609.344;
const NAUTICAL_MILE: f64 = 1_852.0;
const ASTRONOMICAL_UNIT: f64 = 149_597_870_700.0;
const LIGHT_YEAR: f64 = 9.4607304725808e15;
const PARSEC: f64 = 3.08567758149137e16;

const SPEED_OF_LIGHT: f64 = 299_792_458.0;
// Sea level, 20 °C
const MACH: f64 = 343.0;

pub fn table() -> UnitTable {
    let mut t = UnitTable::builder();

    // Base unit and synonym
    t.linear("m/s", 1.0);
    t.linear("mps", 1.0);

    // SI
    // Terameter
    t.linear("Tm/s", 1.0 / 1e12);
    t.linear("Tm/min", MINUTE / 1e12);
    t.linear("Tm/h", HOUR / 1e12);
    t.linear("Tm/d", DAY / 1e12);

    // Gigameter
    t.linear("Gm/s", 1.0 / 1e9);
    t.linear("Gm/min", MINUTE / 1e9);
    t.linear("Gm/h", HOUR / 1e9);
    t.linear("Gm/d", DAY / 1e9);

    // Megameter
    t.linear("Mm/s", 1.0 / 1e6);
    t.linear("Mm/min", MINUTE / 1e6);
    t.linear("Mm/h", HOUR / 1e6);
    t.linear("Mm/d", DAY / 1e6);

    // Kilometer
    t.linear("km/s", 1.0 / 1e3);
    t.linear("km/min", MINUTE / 1e3);
    t.linear("km/h", HOUR / 1e3);
    t.linear("kph", HOUR / 1e3);
    t.linear("km/d", DAY / 1e3);

    // Hectometer
    t.linear("hm/s", 1.0 / 1e2);
    t.linear("hm/min", MINUTE / 1e2);
    t.linear("hm/h", HOUR / 1e2);
    t.linear("hm/d", DAY / 1e2);

    // Decameter
    t.linear("dam/s", 1.0 / 10.0);
    t.linear("dam/min", MINUTE / 10.0);
    t.linear("dam/h", HOUR / 10.0);
    t.linear("dam/d", DAY / 10.0);

    // Meter
    t.linear("m/min", MINUTE);
    t.linear("m/h", HOUR);
    t.linear("m/d", DAY);

    // Decimeter
    t.linear("dm/s", 1.0 / 0.1);
    t.linear("dm/min", MINUTE / 0.1);
    t.linear("dm/h", HOUR / 0.1);
    t.linear("dm/d", DAY / 0.1);

    // Centimeter
    t.linear("cm/s", 1.0 / 0.01);
    t.linear("cm/min", MINUTE / 0.01);
    t.linear("cm/h", HOUR / 0.01);
    t.linear("cm/d", DAY / 0.01);

    // Millimeter
    t.linear("mm/s", 1.0 / 1e-3);
    t.linear("mm/min", MINUTE / 1e-3);
    t.linear("mm/h", HOUR / 1e-3);
    t.linear("mm/d", DAY / 1e-3);

    // Micrometre, ASCII and Greek spellings
    t.linear("um/s", 1.0 / 1e-6);
    t.linear("um/min", MINUTE / 1e-6);
    t.linear("um/h", HOUR / 1e-6);
    t.linear("um/d", DAY / 1e-6);
    t.linear("μm/s", 1.0 / 1e-6);
    t.linear("μm/min", MINUTE / 1e-6);
    t.linear("μm/h", HOUR / 1e-6);
    t.linear("μm/d", DAY / 1e-6);

    // Nanometer
    t.linear("nm/s", 1.0 / 1e-9);
    t.linear("nm/min", MINUTE / 1e-9);
    t.linear("nm/h", HOUR / 1e-9);
    t.linear("nm/d", DAY / 1e-9);

    // Picometer
    t.linear("pm/s", 1.0 / 1e-12);
    t.linear("pm/min", MINUTE / 1e-12);
    t.linear("pm/h", HOUR / 1e-12);
    t.linear("pm/d", DAY / 1e-12);

    // Imperial and US customary
    // Miles
    t.linear("mi/s", 1.0 / MILE);
    t.linear("mi/min", MINUTE / MILE);
    t.linear("mi/h", HOUR / MILE);
    t.linear("mph", HOUR / MILE);
    t.linear("mi/d", DAY / MILE);

    // Furlong
    t.linear("fur/s", 1.0 / FURLONG);
    t.linear("fur/min", MINUTE / FURLONG);
    t.linear("fur/h", HOUR / FURLONG);
    t.linear("fur/d", DAY / FURLONG);

    // Yard
    t.linear("yd/s", 1.0 / YARD);
    t.linear("yd/min", MINUTE / YARD);
    t.linear("yd/h", HOUR / YARD);
    t.linear("yd/d", DAY / YARD);

    // Foot
    t.linear("ft/s", 1.0 / FOOT);
    t.linear("fps", 1.0 / FOOT);
    t.linear("ft/min", MINUTE / FOOT);
    t.linear("fpm", MINUTE / FOOT);
    t.linear("ft/h", HOUR / FOOT);
    t.linear("ft/d", DAY / FOOT);

    // Inch
    t.linear("in/s", 1.0 / INCH);
    t.linear("ips", 1.0 / INCH);
    t.linear("in/min", MINUTE / INCH);
    t.linear("in/h", HOUR / INCH);
    t.linear("in/d", DAY / INCH);

    // Nautical
    t.linear("nmi/s", 1.0 / NAUTICAL_MILE);
    t.linear("nmi/min", MINUTE / NAUTICAL_MILE);
    t.linear("nmi/h", HOUR / NAUTICAL_MILE);
    t.linear("knots", HOUR / NAUTICAL_MILE);
    t.linear("knot", HOUR / NAUTICAL_MILE);
    t.linear("kn", HOUR / NAUTICAL_MILE);
    t.linear("nmi/d", DAY / NAUTICAL_MILE);

    // Scientific and astronomical
    t.linear("c", 1.0 / SPEED_OF_LIGHT);
    t.linear("mach", 1.0 / MACH);

    // Astronomical Unit (AU)
    t.linear("AU/s", 1.0 / ASTRONOMICAL_UNIT);
    t.linear("AU/min", MINUTE / ASTRONOMICAL_UNIT);
    t.linear("AU/h", HOUR / ASTRONOMICAL_UNIT);
    t.linear("AU/d", DAY / ASTRONOMICAL_UNIT);
    t.linear("AU/year", JULIAN_YEAR / ASTRONOMICAL_UNIT);

    // Light-year (ly)
    t.linear("ly/s", 1.0 / LIGHT_YEAR);
    t.linear("ly/min", MINUTE / LIGHT_YEAR);
    t.linear("ly/h", HOUR / LIGHT_YEAR);
    t.linear("ly/d", DAY / LIGHT_YEAR);
    t.linear("ly/year", JULIAN_YEAR / LIGHT_YEAR);

    // Parsec
    t.linear("pc/s", 1.0 / PARSEC);
    t.linear("pc/min", MINUTE / PARSEC);
    t.linear("pc/h", HOUR / PARSEC);
    t.linear("pc/d", DAY / PARSEC);
    t.linear("pc/year", JULIAN_YEAR / PARSEC);

    t.build()
}
