//! Temperature scales.
//!
//! Base unit is the degree Celsius. Unlike every other quantity, most
//! temperature scales carry an offset, and a few (Delisle, Linnaeus) run
//! backwards with a negative scale. The SI-prefixed Kelvin entries scale
//! both the factor and the 273.15 offset.

use metron_core::UnitTable;

pub const BASE_UNIT: &str = "ºC";

pub fn table() -> UnitTable {
    let mut t = UnitTable::builder();

    // Base unit and synonyms
    t.linear("ºC", 1.0);
    t.linear("C", 1.0);
    t.linear("Celsius", 1.0);

    // Common scales
    t.unit("°F", 1.8, 32.0);
    t.unit("F", 1.8, 32.0);
    t.unit("Fahrenheit", 1.8, 32.0);
    t.unit("ºR", 1.8, 491.67);
    t.unit("Rankine", 1.8, 491.67);

    // Kelvin (SI absolute) and SI prefixes
    t.unit("K", 1.0, 273.15);
    t.unit("Kelvin", 1.0, 273.15);
    // Multiples
    t.unit("daK", 1e-1, 273.15e-1);
    t.unit("hK", 1e-2, 273.15e-2);
    t.unit("kK", 1e-3, 273.15e-3);
    t.unit("MK", 1e-6, 273.15e-6);
    t.unit("GK", 1e-9, 273.15e-9);
    t.unit("TK", 1e-12, 273.15e-12);
    t.unit("PK", 1e-15, 273.15e-15);
    t.unit("EK", 1e-18, 273.15e-18);
    t.unit("ZK", 1e-21, 273.15e-21);
    t.unit("YK", 1e-24, 273.15e-24);
    t.unit("RK", 1e-27, 273.15e-27);
    t.unit("QK", 1e-30, 273.15e-30);
    // Submultiples
    t.unit("dK", 1e1, 273.15e1);
    t.unit("cK", 1e2, 273.15e2);
    t.unit("mK", 1e3, 273.15e3);
    t.unit("µK", 1e6, 273.15e6);
    t.unit("nK", 1e9, 273.15e9);
    t.unit("pK", 1e12, 273.15e12);
    t.unit("fK", 1e15, 273.15e15);
    t.unit("aK", 1e18, 273.15e18);
    t.unit("zK", 1e21, 273.15e21);
    t.unit("yK", 1e24, 273.15e24);
    t.unit("rK", 1e27, 273.15e27);
    t.unit("qK", 1e30, 273.15e30);

    // Historical and obsolete scales
    t.unit("ºD", -1.5, 150.0);
    t.unit("Delisle", -1.5, 150.0);
    t.linear("ºRe", 0.8);
    t.linear("Reaumur", 0.8);
    t.linear("ºN", 0.33); // Newton
    t.linear("Newton", 0.33);
    t.unit("ºRø", 21.0 / 40.0, 7.5);
    t.unit("Rømer", 21.0 / 40.0, 7.5);
    t.unit("ºDu", 1.104, -10.4);
    t.unit("DuCrest", 1.104, -10.4);
    t.unit("ºLi", -1.0, 100.0);
    t.unit("Linnaeus", -1.0, 100.0);
    t.unit("ºF(96)", 64.0 / 37.0, 32.0);
    t.unit("Fahrenheit-96", 64.0 / 37.0, 32.0);
    t.unit("ºW", 9.0 / 650.0, -2091.0 / 260.0);
    t.unit("ºL", 1.0, 253.0);

    // Specialized and scientific
    t.unit("GM", 0.072, -8.72);
    t.linear("T_P", 7.058e-33);

    t.build()
}
