//! Area units, base unit square metre.

use metron_core::UnitTable;

pub const BASE_UNIT: &str = "m²";

pub fn table() -> UnitTable {
    let mut t = UnitTable::builder();

    // Base unit and metric (SI) units
    t.linear("m²", 1.0);
    t.linear("sq m", 1.0);
    // Multiples
    t.linear("dam²", 1e-2);
    t.linear("hm²", 1e-4);
    t.linear("km²", 1e-6);
    t.linear("Mm²", 1e-12);
    t.linear("Gm²", 1e-18);
    t.linear("Tm²", 1e-24);
    t.linear("Pm²", 1e-30);
    t.linear("Em²", 1e-36);
    t.linear("Zm²", 1e-42);
    t.linear("Ym²", 1e-48);
    t.linear("Rm²", 1e-54);
    t.linear("Qm²", 1e-60);
    // Submultiples
    t.linear("dm²", 1e2);
    t.linear("cm²", 1e4);
    t.linear("mm²", 1e6);
    t.linear("µm²", 1e12);
    t.linear("nm²", 1e18);
    t.linear("pm²", 1e24);
    t.linear("fm²", 1e30);
    t.linear("am²", 1e36);
    t.linear("zm²", 1e42);
    t.linear("ym²", 1e48);
    t.linear("rm²", 1e54);
    t.linear("qm²", 1e60);

    // Metric Land/Common
    t.linear("a", 1e-2);
    t.linear("ha", 1e-4);
    t.linear("decare", 1e-3);

    // Imperial and US customary
    t.linear("in²", 1.0 / 0.00064516);
    t.linear("ft²", 1.0 / 0.09290304);
    t.linear("yd²", 1.0 / 0.83612736);
    t.linear("rd²", 1.0 / 25.2929538);
    t.linear("perch²", 1.0 / 25.2929538);
    t.linear("rood", 1.0 / 1011.71415);
    t.linear("acre", 1.0 / 4046.85642);
    t.linear("mi²", 1.0 / 2589988.11);
    t.linear("sq in", 1.0 / 0.00064516);
    t.linear("sq ft", 1.0 / 0.09290304);
    t.linear("sq yd", 1.0 / 0.83612736);
    t.linear("sq mi", 1.0 / 2589988.11);

    // US surveying
    t.linear("acre-us", 1.0 / 4046.87261);
    t.linear("ft²-us", 1.0 / 0.0929034116);
    t.linear("rd²-us", 1.0 / 25.2929997);
    t.linear("section", 1.0 / 2589998.47);
    t.linear("township", 1.0 / 93239944.9);

    // Historical and regional (European)
    // French
    t.linear("arpent-fr-roi", 1.0 / 3418.89);
    t.linear("perche²-fr-roi", 1.0 / 34.1889);
    t.linear("arpent-fr-ord", 1.0 / 4220.8);
    t.linear("perche²-fr-ord", 1.0 / 42.208);
    t.linear("journal-fr", 1.0 / 3418.89);
    // Spanish
    t.linear("fanega-es", 1.0 / 6450.0);
    t.linear("cuerda-pr", 1.0 / 3930.3956);
    t.linear("caballería-es", 1.0 / 38624.0);
    t.linear("caballería-cu", 1.0 / 134200.0);
    // Portuguese
    t.linear("alqueire-pt-br", 1.0 / 24200.0);
    t.linear("alqueire-pt-mg", 1.0 / 48400.0);
    // German/Dutch
    t.linear("morgen-pruss", 1.0 / 2553.22);
    t.linear("morgen-nl", 1.0 / 8516.0);
    t.linear("hufe-de", 1.0 / 76590.0);
    // Italian
    t.linear("braccio²-fl", 1.0 / 0.34);
    t.linear("giornata-it", 1.0 / 3810.0);
    // Russian
    t.linear("desyatina-ru", 1.0 / 10925.0);
    t.linear("sotka-ru", 1.0 / 100.0);
    // Scandinavian
    t.linear("tunnland-se", 1.0 / 4936.4);
    t.linear("tønde-land-dk", 1.0 / 5516.2);
    // Irish
    t.linear("acre-ie", 1.0 / 6555.2);

    // Historical and regional (Asian/Middle East)
    // Japanese
    t.linear("tsubo-jp", 1.0 / 3.305785);
    t.linear("tan-jp", 1.0 / 991.7355);
    t.linear("se-jp", 1.0 / 99.17355);
    t.linear("chō-jp", 1.0 / 9917.355);
    // Chinese
    t.linear("mǔ-cn", 1.0 / 666.67);
    t.linear("lí-cn", 1.0 / 66.67);
    t.linear("qǐng-cn", 1.0 / 66666.67);
    // Indian
    t.linear("bigha-in-bengal", 1.0 / 1337.8);
    t.linear("bigha-in-pucca", 1.0 / 2529.29);
    t.linear("katha-in-bengal", 1.0 / 66.89);
    t.linear("gunta-in", 1.0 / 101.17);
    t.linear("ankanam-in", 1.0 / 6.689);
    t.linear("ground-in", 1.0 / 222.96);
    // Thai
    t.linear("rai-th", 1.0 / 1600.0);
    t.linear("ngaan-th", 1.0 / 400.0);
    t.linear("wa²-th", 1.0 / 4.0);
    // Middle East
    t.linear("dunam-ot", 1.0 / 919.3);
    t.linear("dunam-met", 1.0 / 1000.0); // = decare
    t.linear("feddan-egy", 1.0 / 4200.83);

    // Historical (Ancient)
    t.linear("jugerum-rom", 1.0 / 2530.0);
    t.linear("heredium-rom", 1.0 / 5060.0);
    t.linear("centuria-rom", 1.0 / 506000.0);
    t.linear("plethron-gr", 1.0 / 950.0);

    // Scientific and specialized
    t.linear("barn", 1e28);
    t.linear("shed", 1e52);
    t.linear("outbuilding", 1e31);
    t.linear("circular-in", 1.0 / 5.067e-4);
    t.linear("circular-mil", 1.0 / 5.067e-10);

    t.build()
}
