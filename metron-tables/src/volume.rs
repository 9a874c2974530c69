//! Volume units, base unit litre.
//!
//! Cubic metric units are expressed in litres too, so `dm³` is a synonym of `L`.

use metron_core::UnitTable;

pub const BASE_UNIT: &str = "L";

pub fn table() -> UnitTable {
    let mut t = UnitTable::builder();

    // Base and metric (SI) units (Liters)
    t.linear("L", 1.0);
    t.linear("liter", 1.0);
    t.linear("cc", 1000.0);
    t.linear("lambda", 1e6);
    // Multiples
    t.linear("daL", 0.1);
    t.linear("hL", 0.01);
    t.linear("kL", 0.001);
    t.linear("ML", 1e-6);
    t.linear("GL", 1e-9);
    t.linear("TL", 1e-12);
    t.linear("PL", 1e-15);
    t.linear("EL", 1e-18);
    t.linear("ZL", 1e-21);
    t.linear("YL", 1e-24);
    t.linear("RL", 1e-27);
    t.linear("QL", 1e-30);
    // Submultiples
    t.linear("dL", 10.0);
    t.linear("cL", 100.0);
    t.linear("mL", 1000.0);
    t.linear("µL", 1e6);
    t.linear("nL", 1e9);
    t.linear("pL", 1e12);
    t.linear("fL", 1e15);
    t.linear("aL", 1e18);
    t.linear("zL", 1e21);
    t.linear("yL", 1e24);
    t.linear("rL", 1e27);
    t.linear("qL", 1e30);

    // Cubic metric units (m³)
    t.linear("m³", 0.001);
    t.linear("stere", 0.001);
    // Multiples
    t.linear("dam³", 1e-6);
    t.linear("hm³", 1e-9);
    t.linear("km³", 1e-12);
    t.linear("Mm³", 1e-21);
    t.linear("Gm³", 1e-30);
    t.linear("Tm³", 1e-39);
    t.linear("Pm³", 1e-48);
    t.linear("Em³", 1e-57);
    t.linear("Zm³", 1e-66);
    t.linear("Ym³", 1e-75);
    t.linear("Rm³", 1e-84);
    t.linear("Qm³", 1e-93);
    // Submultiples
    t.linear("dm³", 1.0);
    t.linear("cm³", 1000.0);
    t.linear("mm³", 1e6);
    t.linear("µm³", 1e15);
    t.linear("nm³", 1e24);
    t.linear("pm³", 1e33);
    t.linear("fm³", 1e42);
    t.linear("am³", 1e51);
    t.linear("zm³", 1e60);
    t.linear("ym³", 1e69);
    t.linear("rm³", 1e78);
    t.linear("qm³", 1e87);

    // US customary (liquid) and Apothecary
    t.linear("gal", 1.0 / 3.785411784);
    t.linear("qt", 1.0 / 0.946352946);
    t.linear("pt", 1.0 / 0.473176473);
    t.linear("cup", 1.0 / 0.24);
    t.linear("cup-us", 1.0 / 0.2365882365);
    t.linear("fl_oz", 1.0 / 0.0295735295625);
    t.linear("tbsp", 1.0 / 0.01478676478125);
    t.linear("tsp", 1.0 / 0.00492892159375);
    t.linear("gill-us", 1.0 / 0.11829411825);
    t.linear("fldr", 1.0 / 0.0036966911953125);
    t.linear("flsc-us", (1.0 / 0.0295735295625) * 24.0);
    t.linear("min", 1.0 / 6.1611519921875e-5);
    t.linear("bbl-fl", 1.0 / 119.240471196);
    t.linear("bbl-oil", 1.0 / 158.987294928);
    t.linear("rundlet", 1.0 / 69.9721179);
    t.linear("tierce", 1.0 / 158.987294928); // = bbl-oil

    // UK Imperial and Apothecary
    t.linear("gal-uk", 1.0 / 4.54609);
    t.linear("qt-uk", 1.0 / 1.1365225);
    t.linear("pt-uk", 1.0 / 0.56826125);
    t.linear("cup-uk", 1.0 / 0.284130625);
    t.linear("fl_oz-uk", 1.0 / 0.0284130625);
    t.linear("tbsp-uk", 1.0 / 0.0177581640625);
    t.linear("tsp-uk", 1.0 / 0.0059193880208333);
    t.linear("gill-uk", 1.0 / 0.1420653125);
    t.linear("noggin-uk", 4.0 / 0.56826125);
    t.linear("pottle-uk", 1.0 / 2.273045);
    t.linear("fldr-uk", 8.0 / 0.0284130625);
    t.linear("flsc-uk", 24.0 / 0.0284130625);
    t.linear("firkin", 1.0 / 40.91481);
    t.linear("kilderkin-uk", 1.0 / 81.82962);

    // US customary (dry)
    t.linear("gal-us-dry", 1.0 / 4.40488377086);
    t.linear("qt-us-dry", 1.0 / 1.101220942715);
    t.linear("pt-us-dry", 1.0 / 0.5506104713575);
    t.linear("pk-us", 1.0 / 8.80976754172);
    t.linear("bu-us", 1.0 / 35.23907016688);

    // Cubic Imperial / US units
    t.linear("in³", 1.0 / 0.016387064);
    t.linear("ft³", 1.0 / 28.316846592);
    t.linear("yd³", 1.0 / 764.554857984);
    t.linear("mi³", 1.0 / 4.16818182544058e12);
    t.linear("af", 1.0 / 1233481.8375475);

    // Cooking (other metric)
    t.linear("tsp-met", 200.0);
    t.linear("tbsp-met", 1000.0 / 15.0);
    t.linear("cup-met", 4.0);
    t.linear("cup-aus", 4.0);
    t.linear("tbsp-aus", 50.0);
    t.linear("cup-jp", 5.0);

    // Industry and specialized
    t.linear("board-foot", 1.0 / 2.359737216);
    t.linear("cord", 1.0 / 3624.55635);
    t.linear("register-ton", 1.0 / 2831.68466);
    t.linear("hogshead", 1.0 / 238.480942392);
    t.linear("tun", 1.0 / 953.9238);
    t.linear("butt", 1.0 / 476.9619);

    // Historical and regional
    // Spanish
    t.linear("celemín-es", 1.0 / 4.625);
    t.linear("fanega-es-dry", 1.0 / 55.5);
    t.linear("cántara-es", 1.0 / 16.133);
    t.linear("arroba-es-liq", 1.0 / 12.563);
    t.linear("almud-es", 1.0 / 4.625);

    // Portuguese
    t.linear("quartilho-pt", 1.0 / 0.35);
    t.linear("canada-pt", 1.0 / 1.4);
    t.linear("pote-pt", 1.0 / 8.4);
    t.linear("almude-pt", 1.0 / 16.8);
    t.linear("pipa-pt", 1.0 / 420.0);
    t.linear("tonel-pt", 1.0 / 840.0);

    // French
    t.linear("roquille-fr", 1.0 / 0.02975);
    t.linear("poisson-fr", 1.0 / 0.119);
    t.linear("demiard-fr", 1.0 / 0.238);
    t.linear("chopine-fr", 1.0 / 0.4761);
    t.linear("pinte-fr", 1.0 / 0.9521);
    t.linear("velte-fr", 1.0 / 7.617);
    t.linear("quartaut-fr", 1.0 / 68.55);
    t.linear("feuillette-fr", 1.0 / 137.1);
    t.linear("muid-fr-liq", 1.0 / 274.2);
    t.linear("litron-fr-dry", 1.0 / 0.7935);
    t.linear("boisseau-fr-dry", 1.0 / 12.7);
    t.linear("minot-fr-dry", 1.0 / 38.09);
    t.linear("setier-fr-dry", 1.0 / 152.3);
    t.linear("muid-fr-dry", 1.0 / 1828.0);

    // German
    t.linear("ahm-de", 1.0 / 137.4);
    t.linear("ohm-de", 1.0 / 137.4);
    t.linear("anker-de", 1.0 / 34.35);
    t.linear("eimer-de", 1.0 / 68.7);

    // Dutch
    t.linear("anker-nl", 1.0 / 38.8);
    t.linear("stoop-nl", 1.0 / 2.4);
    t.linear("mutsje-nl", 1.0 / 0.15);

    // Scandinavian
    t.linear("kanna-se", 1.0 / 2.617);
    t.linear("pot-dk", 1.0 / 0.966);

    // Russian
    t.linear("garnets-ru", 1.0 / 3.279);
    t.linear("vedro-ru", 1.0 / 12.299);
    t.linear("chetvert-ru-dry", 1.0 / 209.9);
    t.linear("bochka-ru", 1.0 / 491.96);

    // Asian (historical)
    t.linear("go-jp", 1.0 / 0.18039);
    t.linear("sho-jp", 1.0 / 1.8039);
    t.linear("to-jp", 1.0 / 18.039);
    t.linear("koku-liq-jp", 1.0 / 180.39);
    t.linear("koku-dry-jp", 1.0 / 278.3);
    t.linear("sheng-cn", 1.0 / 1.0354688);
    t.linear("dou-cn", 1.0 / 10.354688);
    t.linear("pao-in", 1.0 / 0.233);

    // Ancient
    // Roman
    t.linear("hemina-rom", 1.0 / 0.273);
    t.linear("sextarius-rom", 1.0 / 0.546);
    t.linear("congius-rom", 1.0 / 3.27);
    t.linear("modius-rom", 1.0 / 8.7);
    t.linear("urna-rom", 1.0 / 13.1);
    t.linear("amphora-rom", 1.0 / 26.2);

    // Biblical/Hebrew
    t.linear("log-heb", 1.0 / 0.31);
    t.linear("kab-heb", 1.0 / 1.22);
    t.linear("hin-heb", 1.0 / 3.67);
    t.linear("omer-heb", 1.0 / 2.2);
    t.linear("seah-heb", 1.0 / 7.33);
    t.linear("bath-heb", 1.0 / 22.0);
    t.linear("ephah-heb", 1.0 / 22.0);
    t.linear("homer-heb", 1.0 / 220.0);
    t.linear("kor-heb", 1.0 / 220.0);

    // Babylonian/Egyptian
    t.linear("qa-bab", 1.0 / 1.2);
    t.linear("hekat-egy", 1.0 / 4.8);
    t.linear("hin-egy", 1.0 / 0.48);

    // Physics
    t.linear("V_P", 1.0 / 4.22419e-102);

    t.build()
}
