//! Length units, base unit metre.

use metron_core::UnitTable;

pub const BASE_UNIT: &str = "m";

pub fn table() -> UnitTable {
    let mut t = UnitTable::builder();

    // Metric (SI) units
    t.linear("m", 1.0);
    t.linear("metre", 1.0);
    // Multiples
    t.linear("dam", 0.1);
    t.linear("hm", 0.01);
    t.linear("km", 0.001);
    t.linear("Mm", 1e-6);
    t.linear("Gm", 1e-9);
    t.linear("Tm", 1e-12);
    t.linear("Pm", 1e-15);
    t.linear("Em", 1e-18);
    t.linear("Zm", 1e-21);
    t.linear("Ym", 1e-24);
    t.linear("Rm", 1e-27);
    t.linear("Qm", 1e-30);
    // Submultiples
    t.linear("dm", 10.0);
    t.linear("cm", 100.0);
    t.linear("mm", 1000.0);
    t.linear("µm", 1e6);
    t.linear("nm", 1e9);
    t.linear("pm", 1e12);
    t.linear("fm", 1e15);
    t.linear("am", 1e18);
    t.linear("zm", 1e21);
    t.linear("ym", 1e24);
    t.linear("rm", 1e27);
    t.linear("qm", 1e30);

    // Imperial and US customary units
    t.linear("in", 39.3700787);
    t.linear("inch", 39.3700787);
    t.linear("ft", 3.2808399);
    t.linear("foot", 3.2808399);
    t.linear("yd", 1.0936133);
    t.linear("yard", 1.0936133);
    t.linear("mi", 0.000621371192);
    t.linear("mile", 0.000621371192);
    t.linear("mil", 39370.0787);
    t.linear("barleycorn", 3.0 / 0.0254);
    t.linear("line", 12.0 / 0.0254);
    t.linear("fath", 1.0 / 1.8288);
    t.linear("fathom-en", 1.0 / 1.8288);
    t.linear("fur", 1.0 / 201.168);
    t.linear("furlong", 1.0 / 201.168);
    t.linear("ch", 1.0 / 20.1168);
    t.linear("rd", 1.0 / 5.0292);
    t.linear("pole", 1.0 / 5.0292);
    t.linear("perch", 1.0 / 5.0292);
    t.linear("lea-en", 1.0 / 4828.032);
    t.linear("hh", 1.0 / 0.1016);
    t.linear("hand", 1.0 / 0.1016);
    t.linear("span", 1.0 / 0.2286);
    t.linear("quarter", 1.0 / 0.2286);
    t.linear("pace-en", 1.0 / 0.762);
    t.linear("rope", 1.0 / 6.096);
    t.linear("bolt-us", 1.0 / 91.44);
    t.linear("ell-en", 1.0 / 1.143);
    t.linear("finger", 1.0 / 0.1143);
    t.linear("nail", 1.0 / 0.05715);
    t.linear("caliber", 100.0 / 0.0254);
    t.linear("button", 8.0 / 0.0254);

    // Surveying and nautical units
    t.linear("nmi", 1.0 / 1852.0);
    t.linear("cbl", 1.0 / 185.2);
    t.linear("shackle", 1.0 / 27.432);
    t.linear("ft-us", 3937.0 / 1200.0);
    t.linear("li-gunter", 1.0 / 0.201168);
    t.linear("li-ramden", 1.0 / 0.3048);
    t.linear("ch-ramden", 1.0 / 30.48);
    t.linear("ch-rathbone", 1.0 / 10.0584);
    t.linear("yd-mega", 1.0 / 0.829);

    // Astronomical and physics units
    t.linear("au", 1.0 / 1.495978707e11);
    t.linear("ly", 1.0 / 9.4607e15);
    t.linear("light-ns", 1.0 / 0.299792458);
    t.linear("pc", 1.0 / 3.085677581e16);
    t.linear("kpc", 1.0 / 3.085677581e19);
    t.linear("Mpc", 1.0 / 3.085677581e22);
    t.linear("Gpc", 1.0 / 3.085677581e25);
    t.linear("Tpc", 1.0 / 3.085677581e28);
    t.linear("Ppc", 1.0 / 3.085677581e31);
    t.linear("Epc", 1.0 / 3.085677581e34);
    t.linear("Zpc", 1.0 / 3.085677581e37);
    t.linear("Ypc", 1.0 / 3.085677581e40);
    t.linear("siriometer", 1.0 / 1.4959787e17);
    t.linear("D_H", 1.0 / 1.303e26);
    t.linear("Å", 1e10);
    t.linear("micron", 1e6);
    t.linear("fermi", 1e15);
    t.linear("a_0", 1.0 / 5.29177e-11);
    t.linear("l_P", 1.0 / 1.616255e-35);
    t.linear("xu", 1.0 / 1.0021e-13);
    t.linear("S", 1e-12); // same factor as Tm

    // Typographical and digital units
    t.linear("pt", 72.0 / 0.0254);
    t.linear("pica", 6.0 / 0.0254);
    t.linear("px", 96.0 / 0.0254);
    t.linear("twip", 1440.0 / 0.0254);
    t.linear("agate", 72.0 / (5.5 * 0.0254));
    t.linear("cicero", 1.0 / 0.004511658);
    t.linear("didot-pt", 1.0 / 0.00037597);
    t.linear("pcl-pt", 300.0 / 0.0254);
    t.linear("ligne", 144.0 / 0.3248);

    // Historical and regional units
    // Ancient
    t.linear("cubit-egy", 1.0 / 0.524);
    t.linear("pes-rom", 1.0 / 0.296);
    t.linear("passus-rom", 1.0 / 1.48);
    t.linear("mi-rom", 1.0 / 1480.0);
    t.linear("stadion-gr", 1.0 / 185.0);
    t.linear("beru-bab", 1.0 / 10800.0);
    t.linear("kus-sumer", 1.0 / 0.495);
    t.linear("su-si", 1.0 / 0.0165);
    t.linear("tefach", 1.0 / 0.0762);
    t.linear("zeret", 1.0 / 0.2286);
    t.linear("amah", 1.0 / 0.4572);

    // French
    t.linear("point-fr", 1.0 / 0.000188);
    t.linear("ligne-fr", 1.0 / 0.002256);
    t.linear("pouce-fr", 1.0 / 0.02707);
    t.linear("pied-fr", 1.0 / 0.3248394);
    t.linear("toise-fr", 1.0 / 1.949036);
    t.linear("perche-fr-arpent", 1.0 / 7.146);
    t.linear("perche-fr-roi", 1.0 / 5.847);
    t.linear("perche-fr-ord", 1.0 / 6.497);
    t.linear("arpent-fr-arpent", 1.0 / 71.46);
    t.linear("arpent-fr-roi", 1.0 / 58.47);
    t.linear("lieue-fr-ancienne", 1.0 / 3248.0);
    t.linear("lieue-fr", 1.0 / 3898.0);
    t.linear("lieue-fr-postes", 1.0 / 4288.0);
    t.linear("lieue-fr-degre", 1.0 / 4448.0);
    t.linear("lieue-fr-tarif", 1.0 / 4678.0);

    // Spanish
    t.linear("ponto-es", 1.0 / 0.0001613);
    t.linear("línea-es", 1.0 / 0.001935);
    t.linear("pulgada-es", 1.0 / 0.023216);
    t.linear("pie-es", 1.0 / 0.2786);
    t.linear("codo-es", 1.0 / 0.41783);
    t.linear("codo-real-es", 1.0 / 0.55778);
    t.linear("vara-es", 1.0 / 0.8359);
    t.linear("paso-es", 1.0 / 1.3932);
    t.linear("braza-es", 1.0 / 1.6718);
    t.linear("estadal-es", 1.0 / 3.3436);
    t.linear("milla-es", 1.0 / 1393.2);
    t.linear("legua-es", 1.0 / 4179.5);

    // Portuguese
    t.linear("ponto-pt", 1.0 / 0.00019);
    t.linear("linha-pt", 1.0 / 0.00229);
    t.linear("polegada-pt", 1.0 / 0.0275);
    t.linear("palmo-pt", 1.0 / 0.22);
    t.linear("pé-pt", 1.0 / 0.33);
    t.linear("côvado-pt", 1.0 / 0.66);
    t.linear("vara-pt", 1.0 / 1.1);
    t.linear("passo-pt", 1.0 / 1.65);
    t.linear("toesa-pt", 1.0 / 1.98);
    t.linear("braça-pt", 1.0 / 2.2);
    t.linear("légua-pt-20", 1.0 / 5555.0);
    t.linear("légua-pt-18", 1.0 / 6173.0);
    t.linear("milha-pt", 1.0 / 1852.0); // = nmi

    // Italian (regional)
    t.linear("linea-it-genoa", 1.0 / 0.00172);
    t.linear("oncia-it-rome", 1.0 / 0.0186);
    t.linear("pollice-it-genoa", 1.0 / 0.02067);
    t.linear("palmo-it-rome-arch", 1.0 / 0.22319);
    t.linear("palmo-it-sicily", 1.0 / 0.24203);
    t.linear("palmo-it-rome-merc", 1.0 / 0.24908);
    t.linear("palmo-it-naples", 1.0 / 0.26455);
    t.linear("piede-it-rome", 1.0 / 0.297587);
    t.linear("piede-it", 1.0 / 0.2977);
    t.linear("piede-it-venice", 1.0 / 0.347735);
    t.linear("piede-it-bologna", 1.0 / 0.38);
    t.linear("piede-it-milan", 1.0 / 0.435185);
    t.linear("piede-it-liprando", 1.0 / 0.51377);
    t.linear("braccio-fl", 1.0 / 0.583);
    t.linear("braccio-it-milan", 1.0 / 0.59494);
    t.linear("braccio-it-rome-tele", 1.0 / 0.635);
    t.linear("braccio-it-bologna", 1.0 / 0.64);
    t.linear("braccio-it-rome-merc", 1.0 / 0.67);
    t.linear("braccio-it-venice", 1.0 / 0.683);
    t.linear("canna-it-rome-merc", 1.0 / 1.99263);
    t.linear("canna-it-sicily", 1.0 / 2.0648);
    t.linear("canna-it-rome-arch", 1.0 / 2.2319);
    t.linear("canna-it-naples", 1.0 / 2.6455);
    t.linear("miglio-it-sicily", 1.0 / 1486.66);
    t.linear("miglio-it-rome", 1.0 / 1487.93);
    t.linear("miglio-it-venice", 1.0 / 1738.67);
    t.linear("miglio-it-milan", 1.0 / 1784.81);

    // German/Prussian
    t.linear("linie-de", 1.0 / 0.002179);
    t.linear("zoll-de-pruss", 1.0 / 0.026154);
    t.linear("fuss-pruss", 1.0 / 0.31385);
    t.linear("fuss-de-rhine", 1.0 / 0.31387);
    t.linear("elle-pruss", 1.0 / 0.58847);
    t.linear("klafter-de", 1.0 / 1.8831);
    t.linear("rute-pruss", 1.0 / 3.7662);
    t.linear("wegstunde-de", 1.0 / 3710.0);
    t.linear("meile-de-bavaria", 1.0 / 7415.0);
    t.linear("meile-de-geo", 1.0 / 7420.54);
    t.linear("meile-de", 1.0 / 7500.0);
    t.linear("meile-de-pruss", 1.0 / 7532.5);

    // Other European
    t.linear("verst", 1.0 / 1066.8);
    t.linear("arshin", 1.0 / 0.7112);
    t.linear("mi-scot", 1.0 / 1814.2);
    t.linear("ell-scot", 1.0 / 0.9413);
    t.linear("mil-scan", 1.0 / 10000.0);
    t.linear("alen-dk", 1.0 / 0.6277);
    t.linear("aln-se", 1.0 / 0.5938);
    t.linear("tum-se", 24.0 / 0.5938);

    // Asian
    t.linear("li-cn", 1.0 / 500.0);
    t.linear("zhang-cn", 0.3);
    t.linear("chi-cn", 3.0);
    t.linear("cun-cn", 30.0);
    t.linear("fen-cn", 300.0);
    t.linear("sun-jp", 1.0 / 0.030303);
    t.linear("shaku-jp", 1.0 / 0.30303);
    t.linear("ken-jp", 1.0 / 1.81818);
    t.linear("ri-jp", 1.0 / 3927.27);

    // Indian and Middle Eastern
    t.linear("gaz", 1.0 / 0.9144);
    t.linear("kos", 1.0 / 3218.69);
    t.linear("angula", 1.0 / 0.01778);
    t.linear("farsakh", 1.0 / 5500.0);
    t.linear("arash", 1.0 / 0.95);

    // Specialized industry units
    // Textile
    t.linear("hank-cotton", 1.0 / 768.096);
    t.linear("skein-wool", 1.0 / 109.728);
    t.linear("spyndle", 1.0 / 13167.36);

    // Manufacturing / other
    t.linear("U", 1.0 / 0.04445);

    t.build()
}
