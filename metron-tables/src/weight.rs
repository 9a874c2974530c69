//! Mass units, base unit kilogram.

use metron_core::UnitTable;

pub const BASE_UNIT: &str = "kg";

pub fn table() -> UnitTable {
    let mut t = UnitTable::builder();

    // Base unit and synonyms
    t.linear("kg", 1.0);
    t.linear("kilogram", 1.0);
    t.linear("kilo", 1.0);

    // Metric (SI) units (full range)
    t.linear("g", 1000.0);
    t.linear("gram", 1000.0);
    t.linear("tonne", 0.001);
    t.linear("ton", 0.001);
    // Multiples
    t.linear("dag", 100.0);
    t.linear("hg", 10.0);
    t.linear("Mg", 0.001);
    t.linear("Gg", 1e-6);
    t.linear("Tg", 1e-9);
    t.linear("Pg", 1e-12);
    t.linear("Eg", 1e-15);
    t.linear("Zg", 1e-18);
    t.linear("Yg", 1e-21);
    t.linear("Rg", 1e-24);
    t.linear("Qg", 1e-27);
    // Submultiples
    t.linear("dg", 10000.0);
    t.linear("cg", 100000.0);
    t.linear("mg", 1e6);
    t.linear("ug", 1e9);
    t.linear("mcg", 1e9);
    t.linear("ng", 1e12);
    t.linear("pg", 1e15);
    t.linear("fg", 1e18);
    t.linear("ag", 1e21);
    t.linear("zg", 1e24);
    t.linear("yg", 1e27);
    t.linear("rg", 1e30);
    t.linear("qg", 1e33);

    // Imperial and US customary (Avoirdupois)
    t.linear("lb", 1.0 / 0.45359237);
    t.linear("pound", 1.0 / 0.45359237);
    t.linear("oz", 1.0 / 0.028349523125);
    t.linear("ounce", 1.0 / 0.028349523125);
    t.linear("dr", 1.0 / 0.0017718451953125);
    t.linear("gr", 1.0 / 6.479891e-5);
    t.linear("st", 1.0 / 6.35029318);
    t.linear("cwt", 1.0 / 45.359237);
    t.linear("lwt", 1.0 / 50.80234544);
    t.linear("uston", 1.0 / 907.18474);
    t.linear("ukton", 1.0 / 1016.0469088);
    t.linear("slug", 1.0 / 14.59390294);

    // Troy and Apothecary
    t.linear("lbt", 1.0 / 0.3732417216);
    t.linear("ozt", 1.0 / 0.0311034768);
    t.linear("dwt", 1.0 / 0.00155517384);
    t.linear("ozap", 1.0 / 0.0311034768);
    t.linear("drap", 1.0 / 0.0038879346);
    t.linear("sgr", 1.0 / 0.0012959782);

    // Historical and regional (European)
    // French (Paris)
    t.linear("livre-fr", 1.0 / 0.4895);
    t.linear("marc-fr", 1.0 / 0.24475);
    t.linear("once-fr", 1.0 / 0.03059);
    t.linear("gros-fr", 1.0 / 0.003824);
    t.linear("grain-fr", 1.0 / 5.311e-5);
    // Spanish (Castilian)
    t.linear("libra-es", 1.0 / 0.460093);
    t.linear("onza-es", 1.0 / 0.02875);
    t.linear("grano-es", 1.0 / 3.55e-5);
    t.linear("arroba-es", 1.0 / 11.502);
    t.linear("quintal-es", 1.0 / 46.009);
    // Portuguese
    t.linear("arratel-pt", 1.0 / 0.459);
    t.linear("libra-pt", 1.0 / 0.459);
    t.linear("onca-pt", 1.0 / 0.02868);
    t.linear("grao-pt", 1.0 / 4.99e-5);
    t.linear("arroba-pt", 1.0 / 14.688);
    t.linear("quintal-pt", 1.0 / 58.752);
    // German (Prussian)
    t.linear("pfund-de", 1.0 / 0.4677);
    t.linear("unze-de", 1.0 / 0.02923);
    t.linear("loth-de", 1.0 / 0.01461);
    t.linear("zentner-de", 1.0 / 46.77);
    // Russian
    t.linear("funt-ru", 1.0 / 0.4095);
    t.linear("zolotnik-ru", 1.0 / 0.00426);
    t.linear("dolia-ru", 1.0 / 4.44e-5);
    t.linear("pood", 1.0 / 16.38);

    // Historical and regional (Asian)
    t.linear("tael", 1.0 / 0.05);
    t.linear("catti", 1.0 / 0.6048);
    t.linear("picul", 1.0 / 60.48);
    t.linear("momme-jp", 1.0 / 0.00375);
    t.linear("tola-in", 1.0 / 0.01166);
    t.linear("seer-in", 1.0 / 0.933);

    // Historical (Ancient)
    // Roman
    t.linear("libra-rom", 1.0 / 0.3289);
    t.linear("uncia-rom", 1.0 / 0.0274);
    t.linear("drachma-rom", 1.0 / 0.00342);
    // Greek (Attic)
    t.linear("mina-gr", 1.0 / 0.431);
    t.linear("drachma-gr", 1.0 / 0.00431);
    t.linear("obol-gr", 1.0 / 0.00072);
    // Hebrew
    t.linear("shekel-heb", 1.0 / 0.0114);
    t.linear("beka-heb", 1.0 / 0.0057);
    t.linear("gerah-heb", 1.0 / 0.00057);
    t.linear("talent-heb", 1.0 / 34.2);

    // Scientific and specialized
    t.linear("ct", 5000.0);
    t.linear("Da", 1.0 / 1.660539e-27);
    t.linear("gamma", 1e9);
    t.linear("m_p", 1.0 / 2.1764e-8);
    t.linear("M_earth", 1.0 / 5.972e24);
    t.linear("M_jup", 1.0 / 1.898e27);
    t.linear("M_solar", 1.0 / 1.989e30);
    t.linear("M_sun", 1.0 / 1.989e30);

    t.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use metron_core::Converter;

    #[test]
    fn test_pound() {
        let w = Converter::new(table());
        assert_relative_eq!(w.convert(1.0, "lb", "kg").unwrap(), 0.45359237, max_relative = 1e-12);
        assert_relative_eq!(w.convert(1.0, "lb", "oz").unwrap(), 16.0, max_relative = 1e-12);
    }

    #[test]
    fn test_troy_ounce_is_apothecary_ounce() {
        let w = Converter::new(table());
        assert_eq!(w.convert(2.0, "ozt", "g").unwrap(), w.convert(2.0, "ozap", "g").unwrap());
    }

    #[test]
    fn test_carat() {
        assert_relative_eq!(
            Converter::new(table()).convert(5.0, "ct", "g").unwrap(),
            1.0,
            max_relative = 1e-12
        );
    }
}
