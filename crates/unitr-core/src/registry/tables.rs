//! Built-in prefix, quantity, unit, alias and unit-system tables
//!
//! To add a unit, append an entry to [`UNITS`] (or [`ALIASES`] for an
//! alternate spelling). Resolution walks [`UNITS`] and then [`ALIASES`] in
//! declaration order, so position matters when two names share a suffix.

use std::f64::consts::PI;

/// `(name, factor, preferred for scientific notation)`
pub struct PrefixSpec(pub &'static str, pub f64, pub bool);

/// `(name, exponents in base dimension order)`
pub struct QuantitySpec(pub &'static str, pub [f64; 9]);

/// `(name, quantity, prefix table, scale, offset)`
pub struct UnitSpec(
    pub &'static str,
    pub &'static str,
    pub &'static str,
    pub f64,
    pub f64,
);

/// `(quantity, unit, prefix)` entry of a unit system
pub type SystemSpec = (&'static str, &'static str, &'static str);

// Prefixes

pub static NONE: &[PrefixSpec] = &[PrefixSpec("", 1.0, true)];

pub static SHORT: &[PrefixSpec] = &[
    PrefixSpec("", 1.0, true),
    PrefixSpec("da", 1e1, false),
    PrefixSpec("h", 1e2, false),
    PrefixSpec("k", 1e3, true),
    PrefixSpec("M", 1e6, true),
    PrefixSpec("G", 1e9, true),
    PrefixSpec("T", 1e12, true),
    PrefixSpec("P", 1e15, true),
    PrefixSpec("E", 1e18, true),
    PrefixSpec("Z", 1e21, true),
    PrefixSpec("Y", 1e24, true),
    PrefixSpec("R", 1e27, true),
    PrefixSpec("Q", 1e30, true),
    PrefixSpec("d", 1e-1, false),
    PrefixSpec("c", 1e-2, false),
    PrefixSpec("m", 1e-3, true),
    PrefixSpec("u", 1e-6, true),
    PrefixSpec("n", 1e-9, true),
    PrefixSpec("p", 1e-12, true),
    PrefixSpec("f", 1e-15, true),
    PrefixSpec("a", 1e-18, true),
    PrefixSpec("z", 1e-21, true),
    PrefixSpec("y", 1e-24, true),
    PrefixSpec("r", 1e-27, true),
    PrefixSpec("q", 1e-30, true),
];

pub static LONG: &[PrefixSpec] = &[
    PrefixSpec("", 1.0, true),
    PrefixSpec("deca", 1e1, false),
    PrefixSpec("hecto", 1e2, false),
    PrefixSpec("kilo", 1e3, true),
    PrefixSpec("mega", 1e6, true),
    PrefixSpec("giga", 1e9, true),
    PrefixSpec("tera", 1e12, true),
    PrefixSpec("peta", 1e15, true),
    PrefixSpec("exa", 1e18, true),
    PrefixSpec("zetta", 1e21, true),
    PrefixSpec("yotta", 1e24, true),
    PrefixSpec("ronna", 1e27, true),
    PrefixSpec("quetta", 1e30, true),
    PrefixSpec("deci", 1e-1, false),
    PrefixSpec("centi", 1e-2, false),
    PrefixSpec("milli", 1e-3, true),
    PrefixSpec("micro", 1e-6, true),
    PrefixSpec("nano", 1e-9, true),
    PrefixSpec("pico", 1e-12, true),
    PrefixSpec("femto", 1e-15, true),
    PrefixSpec("atto", 1e-18, true),
    PrefixSpec("zepto", 1e-21, true),
    PrefixSpec("yocto", 1e-24, true),
    PrefixSpec("ronto", 1e-27, true),
    PrefixSpec("quecto", 1e-30, true),
];

pub static SQUARED: &[PrefixSpec] = &[
    PrefixSpec("", 1.0, true),
    PrefixSpec("da", 1e2, false),
    PrefixSpec("h", 1e4, false),
    PrefixSpec("k", 1e6, true),
    PrefixSpec("M", 1e12, true),
    PrefixSpec("G", 1e18, true),
    PrefixSpec("T", 1e24, true),
    PrefixSpec("P", 1e30, true),
    PrefixSpec("E", 1e36, true),
    PrefixSpec("Z", 1e42, true),
    PrefixSpec("Y", 1e48, true),
    PrefixSpec("R", 1e54, true),
    PrefixSpec("Q", 1e60, true),
    PrefixSpec("d", 1e-2, false),
    PrefixSpec("c", 1e-4, false),
    PrefixSpec("m", 1e-6, true),
    PrefixSpec("u", 1e-12, true),
    PrefixSpec("n", 1e-18, true),
    PrefixSpec("p", 1e-24, true),
    PrefixSpec("f", 1e-30, true),
    PrefixSpec("a", 1e-36, true),
    PrefixSpec("z", 1e-42, true),
    PrefixSpec("y", 1e-48, true),
    PrefixSpec("r", 1e-54, true),
    PrefixSpec("q", 1e-60, true),
];

pub static CUBIC: &[PrefixSpec] = &[
    PrefixSpec("", 1.0, true),
    PrefixSpec("da", 1e3, false),
    PrefixSpec("h", 1e6, false),
    PrefixSpec("k", 1e9, true),
    PrefixSpec("M", 1e18, true),
    PrefixSpec("G", 1e27, true),
    PrefixSpec("T", 1e36, true),
    PrefixSpec("P", 1e45, true),
    PrefixSpec("E", 1e54, true),
    PrefixSpec("Z", 1e63, true),
    PrefixSpec("Y", 1e72, true),
    PrefixSpec("R", 1e81, true),
    PrefixSpec("Q", 1e90, true),
    PrefixSpec("d", 1e-3, false),
    PrefixSpec("c", 1e-6, false),
    PrefixSpec("m", 1e-9, true),
    PrefixSpec("u", 1e-18, true),
    PrefixSpec("n", 1e-27, true),
    PrefixSpec("p", 1e-36, true),
    PrefixSpec("f", 1e-45, true),
    PrefixSpec("a", 1e-54, true),
    PrefixSpec("z", 1e-63, true),
    PrefixSpec("y", 1e-72, true),
    PrefixSpec("r", 1e-81, true),
    PrefixSpec("q", 1e-90, true),
];

pub static BINARY_SHORT_SI: &[PrefixSpec] = &[
    PrefixSpec("", 1.0, true),
    PrefixSpec("k", 1e3, true),
    PrefixSpec("M", 1e6, true),
    PrefixSpec("G", 1e9, true),
    PrefixSpec("T", 1e12, true),
    PrefixSpec("P", 1e15, true),
    PrefixSpec("E", 1e18, true),
    PrefixSpec("Z", 1e21, true),
    PrefixSpec("Y", 1e24, true),
];

pub static BINARY_SHORT_IEC: &[PrefixSpec] = &[
    PrefixSpec("", 1.0, true),
    PrefixSpec("Ki", 1024.0, true),
    PrefixSpec("Mi", 1048576.0, true),
    PrefixSpec("Gi", 1073741824.0, true),
    PrefixSpec("Ti", 1099511627776.0, true),
    PrefixSpec("Pi", 1125899906842624.0, true),
    PrefixSpec("Ei", 1152921504606846976.0, true),
    PrefixSpec("Zi", 1180591620717411303424.0, true),
    PrefixSpec("Yi", 1208925819614629174706176.0, true),
];

pub static BINARY_LONG_SI: &[PrefixSpec] = &[
    PrefixSpec("", 1.0, true),
    PrefixSpec("kilo", 1e3, true),
    PrefixSpec("mega", 1e6, true),
    PrefixSpec("giga", 1e9, true),
    PrefixSpec("tera", 1e12, true),
    PrefixSpec("peta", 1e15, true),
    PrefixSpec("exa", 1e18, true),
    PrefixSpec("zetta", 1e21, true),
    PrefixSpec("yotta", 1e24, true),
];

pub static BINARY_LONG_IEC: &[PrefixSpec] = &[
    PrefixSpec("", 1.0, true),
    PrefixSpec("kibi", 1024.0, true),
    PrefixSpec("mebi", 1048576.0, true),
    PrefixSpec("gibi", 1073741824.0, true),
    PrefixSpec("tebi", 1099511627776.0, true),
    PrefixSpec("pebi", 1125899906842624.0, true),
    PrefixSpec("exbi", 1152921504606846976.0, true),
    PrefixSpec("zebi", 1180591620717411303424.0, true),
    PrefixSpec("yobi", 1208925819614629174706176.0, true),
];

pub static BTU: &[PrefixSpec] = &[PrefixSpec("", 1.0, true), PrefixSpec("MM", 1e6, true)];

/// Named prefix tables; unions list several parts.
pub static PREFIX_TABLES: &[(&str, &[&[PrefixSpec]])] = &[
    ("NONE", &[NONE]),
    ("SHORT", &[SHORT]),
    ("LONG", &[LONG]),
    ("SQUARED", &[SQUARED]),
    ("CUBIC", &[CUBIC]),
    ("BINARY_SHORT_SI", &[BINARY_SHORT_SI]),
    ("BINARY_SHORT_IEC", &[BINARY_SHORT_IEC]),
    ("BINARY_LONG_SI", &[BINARY_LONG_SI]),
    ("BINARY_LONG_IEC", &[BINARY_LONG_IEC]),
    ("BTU", &[BTU]),
    ("SHORT_LONG", &[SHORT, LONG]),
    ("BINARY_SHORT", &[BINARY_SHORT_SI, BINARY_SHORT_IEC]),
    ("BINARY_LONG", &[BINARY_LONG_SI, BINARY_LONG_IEC]),
];

// Quantities: [MASS, LENGTH, TIME, CURRENT, TEMPERATURE, LUMINOUS_INTENSITY,
//              AMOUNT_OF_SUBSTANCE, ANGLE, BIT]

pub static QUANTITIES: &[QuantitySpec] = &[
    QuantitySpec("NONE", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("MASS", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("LENGTH", [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("TIME", [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("CURRENT", [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("TEMPERATURE", [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("LUMINOUS_INTENSITY", [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]),
    QuantitySpec("AMOUNT_OF_SUBSTANCE", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]),
    QuantitySpec("ANGLE", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
    QuantitySpec("BIT", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]),
    QuantitySpec("SURFACE", [0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("VOLUME", [0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("FREQUENCY", [0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("FORCE", [1.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("ENERGY", [1.0, 2.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("POWER", [1.0, 2.0, -3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("PRESSURE", [1.0, -1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("ELECTRIC_CHARGE", [0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("ELECTRIC_CAPACITANCE", [-1.0, -2.0, 4.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("ELECTRIC_POTENTIAL", [1.0, 2.0, -3.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("ELECTRIC_RESISTANCE", [1.0, 2.0, -3.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("ELECTRIC_INDUCTANCE", [1.0, 2.0, -2.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("ELECTRIC_CONDUCTANCE", [-1.0, -2.0, 3.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("MAGNETIC_FLUX", [1.0, 2.0, -2.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    QuantitySpec("MAGNETIC_FLUX_DENSITY", [1.0, 0.0, -2.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
];

// Units. Scales are relative to the coherent SI root (kg for mass).

pub static UNITS: &[UnitSpec] = &[
    // Length
    UnitSpec("meter", "LENGTH", "LONG", 1.0, 0.0),
    UnitSpec("inch", "LENGTH", "NONE", 0.0254, 0.0),
    UnitSpec("foot", "LENGTH", "NONE", 0.3048, 0.0),
    UnitSpec("yard", "LENGTH", "NONE", 0.9144, 0.0),
    UnitSpec("mile", "LENGTH", "NONE", 1609.344, 0.0),
    UnitSpec("link", "LENGTH", "NONE", 0.201168, 0.0),
    UnitSpec("rod", "LENGTH", "NONE", 5.0292, 0.0),
    UnitSpec("chain", "LENGTH", "NONE", 20.1168, 0.0),
    UnitSpec("angstrom", "LENGTH", "NONE", 1e-10, 0.0),
    UnitSpec("m", "LENGTH", "SHORT", 1.0, 0.0),
    UnitSpec("in", "LENGTH", "NONE", 0.0254, 0.0),
    UnitSpec("ft", "LENGTH", "NONE", 0.3048, 0.0),
    UnitSpec("yd", "LENGTH", "NONE", 0.9144, 0.0),
    UnitSpec("mi", "LENGTH", "NONE", 1609.344, 0.0),
    UnitSpec("li", "LENGTH", "NONE", 0.201168, 0.0),
    UnitSpec("rd", "LENGTH", "NONE", 5.0292, 0.0),
    UnitSpec("ch", "LENGTH", "NONE", 20.1168, 0.0),
    UnitSpec("mil", "LENGTH", "NONE", 0.0000254, 0.0),
    // Surface
    UnitSpec("m2", "SURFACE", "SQUARED", 1.0, 0.0),
    UnitSpec("sqin", "SURFACE", "NONE", 0.00064516, 0.0),
    UnitSpec("sqft", "SURFACE", "NONE", 0.09290304, 0.0),
    UnitSpec("sqyd", "SURFACE", "NONE", 0.83612736, 0.0),
    UnitSpec("sqmi", "SURFACE", "NONE", 2589988.110336, 0.0),
    UnitSpec("sqrd", "SURFACE", "NONE", 25.29295, 0.0),
    UnitSpec("sqch", "SURFACE", "NONE", 404.6873, 0.0),
    UnitSpec("sqmil", "SURFACE", "NONE", 6.4516e-10, 0.0),
    UnitSpec("acre", "SURFACE", "NONE", 4046.86, 0.0),
    UnitSpec("hectare", "SURFACE", "NONE", 10000.0, 0.0),
    // Volume
    UnitSpec("m3", "VOLUME", "CUBIC", 1.0, 0.0),
    UnitSpec("L", "VOLUME", "SHORT", 0.001, 0.0),
    UnitSpec("l", "VOLUME", "SHORT", 0.001, 0.0),
    UnitSpec("litre", "VOLUME", "LONG", 0.001, 0.0),
    UnitSpec("cuin", "VOLUME", "NONE", 1.6387064e-5, 0.0),
    UnitSpec("cuft", "VOLUME", "NONE", 0.028316846592, 0.0),
    UnitSpec("cuyd", "VOLUME", "NONE", 0.764554857984, 0.0),
    UnitSpec("teaspoon", "VOLUME", "NONE", 0.000005, 0.0),
    UnitSpec("tablespoon", "VOLUME", "NONE", 0.000015, 0.0),
    UnitSpec("drop", "VOLUME", "NONE", 5e-8, 0.0),
    UnitSpec("gtt", "VOLUME", "NONE", 5e-8, 0.0),
    UnitSpec("minim", "VOLUME", "NONE", 0.00000006161152, 0.0),
    UnitSpec("fluiddram", "VOLUME", "NONE", 0.0000036966911, 0.0),
    UnitSpec("fluidounce", "VOLUME", "NONE", 0.00002957353, 0.0),
    UnitSpec("gill", "VOLUME", "NONE", 0.0001182941, 0.0),
    UnitSpec("cc", "VOLUME", "NONE", 1e-6, 0.0),
    UnitSpec("cup", "VOLUME", "NONE", 0.0002365882, 0.0),
    UnitSpec("pint", "VOLUME", "NONE", 0.0004731765, 0.0),
    UnitSpec("quart", "VOLUME", "NONE", 0.0009463529, 0.0),
    UnitSpec("gallon", "VOLUME", "NONE", 0.003785412, 0.0),
    UnitSpec("beerbarrel", "VOLUME", "NONE", 0.1173478, 0.0),
    UnitSpec("oilbarrel", "VOLUME", "NONE", 0.1589873, 0.0),
    UnitSpec("hogshead", "VOLUME", "NONE", 0.238481, 0.0),
    UnitSpec("floz", "VOLUME", "NONE", 0.00002957353, 0.0),
    UnitSpec("cp", "VOLUME", "NONE", 0.0002365882, 0.0),
    UnitSpec("pt", "VOLUME", "NONE", 0.0004731765, 0.0),
    UnitSpec("qt", "VOLUME", "NONE", 0.0009463529, 0.0),
    UnitSpec("gal", "VOLUME", "NONE", 0.003785412, 0.0),
    UnitSpec("bbl", "VOLUME", "NONE", 0.1173478, 0.0),
    UnitSpec("obl", "VOLUME", "NONE", 0.1589873, 0.0),
    // Mass
    UnitSpec("g", "MASS", "SHORT", 0.001, 0.0),
    UnitSpec("gram", "MASS", "LONG", 0.001, 0.0),
    UnitSpec("ton", "MASS", "SHORT", 907.18474, 0.0),
    UnitSpec("t", "MASS", "SHORT", 1000.0, 0.0),
    UnitSpec("tonne", "MASS", "LONG", 1000.0, 0.0),
    UnitSpec("grain", "MASS", "NONE", 64.79891e-6, 0.0),
    UnitSpec("dram", "MASS", "NONE", 1.7718451953125e-3, 0.0),
    UnitSpec("ounce", "MASS", "NONE", 28.349523125e-3, 0.0),
    UnitSpec("poundmass", "MASS", "NONE", 453.59237e-3, 0.0),
    UnitSpec("hundredweight", "MASS", "NONE", 45.359237, 0.0),
    UnitSpec("stick", "MASS", "NONE", 115e-3, 0.0),
    UnitSpec("stone", "MASS", "NONE", 6.35029318, 0.0),
    UnitSpec("gr", "MASS", "NONE", 64.79891e-6, 0.0),
    UnitSpec("dr", "MASS", "NONE", 1.7718451953125e-3, 0.0),
    UnitSpec("oz", "MASS", "NONE", 28.349523125e-3, 0.0),
    UnitSpec("lbm", "MASS", "NONE", 453.59237e-3, 0.0),
    UnitSpec("cwt", "MASS", "NONE", 45.359237, 0.0),
    // Time
    UnitSpec("s", "TIME", "SHORT", 1.0, 0.0),
    UnitSpec("min", "TIME", "NONE", 60.0, 0.0),
    UnitSpec("h", "TIME", "NONE", 3600.0, 0.0),
    UnitSpec("second", "TIME", "LONG", 1.0, 0.0),
    UnitSpec("sec", "TIME", "LONG", 1.0, 0.0),
    UnitSpec("minute", "TIME", "NONE", 60.0, 0.0),
    UnitSpec("hour", "TIME", "NONE", 3600.0, 0.0),
    UnitSpec("day", "TIME", "NONE", 86400.0, 0.0),
    UnitSpec("week", "TIME", "NONE", 604800.0, 0.0),
    UnitSpec("month", "TIME", "NONE", 2629800.0, 0.0),
    UnitSpec("year", "TIME", "NONE", 31557600.0, 0.0),
    UnitSpec("decade", "TIME", "NONE", 315576000.0, 0.0),
    UnitSpec("century", "TIME", "NONE", 3155760000.0, 0.0),
    UnitSpec("millennium", "TIME", "NONE", 31557600000.0, 0.0),
    // Frequency
    UnitSpec("hertz", "FREQUENCY", "LONG", 1.0, 0.0),
    UnitSpec("Hz", "FREQUENCY", "SHORT", 1.0, 0.0),
    // Angle
    UnitSpec("rad", "ANGLE", "SHORT", 1.0, 0.0),
    UnitSpec("radian", "ANGLE", "LONG", 1.0, 0.0),
    UnitSpec("deg", "ANGLE", "SHORT", PI / 180.0, 0.0),
    UnitSpec("degree", "ANGLE", "LONG", PI / 180.0, 0.0),
    UnitSpec("grad", "ANGLE", "SHORT", PI / 200.0, 0.0),
    UnitSpec("gradian", "ANGLE", "LONG", PI / 200.0, 0.0),
    UnitSpec("cycle", "ANGLE", "NONE", 2.0 * PI, 0.0),
    UnitSpec("arcsec", "ANGLE", "NONE", PI / 648000.0, 0.0),
    UnitSpec("arcmin", "ANGLE", "NONE", PI / 10800.0, 0.0),
    // Electric current
    UnitSpec("A", "CURRENT", "SHORT", 1.0, 0.0),
    UnitSpec("ampere", "CURRENT", "LONG", 1.0, 0.0),
    UnitSpec("abA", "CURRENT", "NONE", 10.0, 0.0),
    UnitSpec("abampere", "CURRENT", "NONE", 10.0, 0.0),
    // Temperature
    UnitSpec("K", "TEMPERATURE", "SHORT", 1.0, 0.0),
    UnitSpec("degC", "TEMPERATURE", "SHORT", 1.0, 273.15),
    UnitSpec("degF", "TEMPERATURE", "SHORT", 1.0 / 1.8, 459.67),
    UnitSpec("degR", "TEMPERATURE", "SHORT", 1.0 / 1.8, 0.0),
    UnitSpec("kelvin", "TEMPERATURE", "LONG", 1.0, 0.0),
    UnitSpec("celsius", "TEMPERATURE", "LONG", 1.0, 273.15),
    UnitSpec("fahrenheit", "TEMPERATURE", "LONG", 1.0 / 1.8, 459.67),
    UnitSpec("rankine", "TEMPERATURE", "LONG", 1.0 / 1.8, 0.0),
    // Amount of substance
    UnitSpec("mol", "AMOUNT_OF_SUBSTANCE", "SHORT", 1.0, 0.0),
    UnitSpec("mole", "AMOUNT_OF_SUBSTANCE", "LONG", 1.0, 0.0),
    // Luminous intensity
    UnitSpec("cd", "LUMINOUS_INTENSITY", "SHORT", 1.0, 0.0),
    UnitSpec("candela", "LUMINOUS_INTENSITY", "LONG", 1.0, 0.0),
    // Force
    UnitSpec("N", "FORCE", "SHORT", 1.0, 0.0),
    UnitSpec("newton", "FORCE", "LONG", 1.0, 0.0),
    UnitSpec("dyn", "FORCE", "SHORT", 1e-5, 0.0),
    UnitSpec("dyne", "FORCE", "LONG", 1e-5, 0.0),
    UnitSpec("lbf", "FORCE", "NONE", 4.4482216152605, 0.0),
    UnitSpec("poundforce", "FORCE", "NONE", 4.4482216152605, 0.0),
    UnitSpec("kip", "FORCE", "LONG", 4448.2216, 0.0),
    UnitSpec("kilogramforce", "FORCE", "NONE", 9.80665, 0.0),
    // Energy
    UnitSpec("J", "ENERGY", "SHORT", 1.0, 0.0),
    UnitSpec("joule", "ENERGY", "LONG", 1.0, 0.0),
    UnitSpec("erg", "ENERGY", "SHORT", 1e-7, 0.0),
    UnitSpec("Wh", "ENERGY", "SHORT", 3600.0, 0.0),
    UnitSpec("BTU", "ENERGY", "BTU", 1055.05585262, 0.0),
    UnitSpec("eV", "ENERGY", "SHORT", 1.602176565e-19, 0.0),
    UnitSpec("electronvolt", "ENERGY", "LONG", 1.602176565e-19, 0.0),
    // Power
    UnitSpec("W", "POWER", "SHORT", 1.0, 0.0),
    UnitSpec("watt", "POWER", "LONG", 1.0, 0.0),
    UnitSpec("hp", "POWER", "NONE", 745.6998715386, 0.0),
    // Pressure
    UnitSpec("Pa", "PRESSURE", "SHORT", 1.0, 0.0),
    UnitSpec("psi", "PRESSURE", "NONE", 6894.75729276459, 0.0),
    UnitSpec("atm", "PRESSURE", "NONE", 101325.0, 0.0),
    UnitSpec("bar", "PRESSURE", "SHORT_LONG", 100000.0, 0.0),
    UnitSpec("torr", "PRESSURE", "NONE", 133.322, 0.0),
    UnitSpec("mmHg", "PRESSURE", "NONE", 133.322, 0.0),
    UnitSpec("mmH2O", "PRESSURE", "NONE", 9.80665, 0.0),
    UnitSpec("cmH2O", "PRESSURE", "NONE", 98.0665, 0.0),
    // Electromagnetism
    UnitSpec("coulomb", "ELECTRIC_CHARGE", "LONG", 1.0, 0.0),
    UnitSpec("C", "ELECTRIC_CHARGE", "SHORT", 1.0, 0.0),
    UnitSpec("farad", "ELECTRIC_CAPACITANCE", "LONG", 1.0, 0.0),
    UnitSpec("F", "ELECTRIC_CAPACITANCE", "SHORT", 1.0, 0.0),
    UnitSpec("volt", "ELECTRIC_POTENTIAL", "LONG", 1.0, 0.0),
    UnitSpec("V", "ELECTRIC_POTENTIAL", "SHORT", 1.0, 0.0),
    UnitSpec("ohm", "ELECTRIC_RESISTANCE", "SHORT_LONG", 1.0, 0.0),
    UnitSpec("henry", "ELECTRIC_INDUCTANCE", "LONG", 1.0, 0.0),
    UnitSpec("H", "ELECTRIC_INDUCTANCE", "SHORT", 1.0, 0.0),
    UnitSpec("siemens", "ELECTRIC_CONDUCTANCE", "LONG", 1.0, 0.0),
    UnitSpec("S", "ELECTRIC_CONDUCTANCE", "SHORT", 1.0, 0.0),
    UnitSpec("weber", "MAGNETIC_FLUX", "LONG", 1.0, 0.0),
    UnitSpec("Wb", "MAGNETIC_FLUX", "SHORT", 1.0, 0.0),
    UnitSpec("tesla", "MAGNETIC_FLUX_DENSITY", "LONG", 1.0, 0.0),
    UnitSpec("T", "MAGNETIC_FLUX_DENSITY", "SHORT", 1.0, 0.0),
    // Information
    UnitSpec("b", "BIT", "BINARY_SHORT", 1.0, 0.0),
    UnitSpec("bits", "BIT", "BINARY_LONG", 1.0, 0.0),
    UnitSpec("B", "BIT", "BINARY_SHORT", 8.0, 0.0),
    UnitSpec("bytes", "BIT", "BINARY_LONG", 8.0, 0.0),
];

/// `(alias, target)`: each alias becomes its own definition with the
/// target's dimension, scale, offset and prefixes.
pub static ALIASES: &[(&str, &str)] = &[
    ("meters", "meter"),
    ("inches", "inch"),
    ("feet", "foot"),
    ("yards", "yard"),
    ("miles", "mile"),
    ("links", "link"),
    ("rods", "rod"),
    ("chains", "chain"),
    ("angstroms", "angstrom"),
    ("lt", "l"),
    ("litres", "litre"),
    ("liter", "litre"),
    ("liters", "litre"),
    ("teaspoons", "teaspoon"),
    ("tablespoons", "tablespoon"),
    ("minims", "minim"),
    ("fluiddrams", "fluiddram"),
    ("fluidounces", "fluidounce"),
    ("gills", "gill"),
    ("cups", "cup"),
    ("pints", "pint"),
    ("quarts", "quart"),
    ("gallons", "gallon"),
    ("beerbarrels", "beerbarrel"),
    ("oilbarrels", "oilbarrel"),
    ("hogsheads", "hogshead"),
    ("gtts", "gtt"),
    ("grams", "gram"),
    ("tons", "ton"),
    ("tonnes", "tonne"),
    ("grains", "grain"),
    ("drams", "dram"),
    ("ounces", "ounce"),
    ("poundmasses", "poundmass"),
    ("hundredweights", "hundredweight"),
    ("sticks", "stick"),
    ("lb", "lbm"),
    ("lbs", "lbm"),
    ("kips", "kip"),
    ("kgf", "kilogramforce"),
    ("acres", "acre"),
    ("hectares", "hectare"),
    ("sqfeet", "sqft"),
    ("sqyard", "sqyd"),
    ("sqmile", "sqmi"),
    ("sqmiles", "sqmi"),
    ("mmhg", "mmHg"),
    ("mmh2o", "mmH2O"),
    ("cmh2o", "cmH2O"),
    ("seconds", "second"),
    ("secs", "second"),
    ("minutes", "minute"),
    ("mins", "minute"),
    ("hours", "hour"),
    ("hr", "hour"),
    ("hrs", "hour"),
    ("days", "day"),
    ("weeks", "week"),
    ("months", "month"),
    ("years", "year"),
    ("decades", "decade"),
    ("centuries", "century"),
    ("millennia", "millennium"),
    ("radians", "radian"),
    ("degrees", "degree"),
    ("gradians", "gradian"),
    ("cycles", "cycle"),
    ("arcsecond", "arcsec"),
    ("arcseconds", "arcsec"),
    ("arcminute", "arcmin"),
    ("arcminutes", "arcmin"),
    ("BTUs", "BTU"),
    ("watts", "watt"),
    ("joules", "joule"),
    ("amperes", "ampere"),
    ("amps", "ampere"),
    ("coulombs", "coulomb"),
    ("volts", "volt"),
    ("ohms", "ohm"),
    ("farads", "farad"),
    ("webers", "weber"),
    ("teslas", "tesla"),
    ("electronvolts", "electronvolt"),
    ("moles", "mole"),
    ("bit", "bits"),
    ("byte", "bytes"),
];

// Unit systems

pub static SI: &[SystemSpec] = &[
    ("LENGTH", "m", ""),
    ("MASS", "g", "k"),
    ("TIME", "s", ""),
    ("CURRENT", "A", ""),
    ("TEMPERATURE", "K", ""),
    ("LUMINOUS_INTENSITY", "cd", ""),
    ("AMOUNT_OF_SUBSTANCE", "mol", ""),
    ("ANGLE", "rad", ""),
    ("BIT", "bits", ""),
    ("FORCE", "N", ""),
    ("ENERGY", "J", ""),
    ("POWER", "W", ""),
    ("PRESSURE", "Pa", ""),
    ("FREQUENCY", "Hz", ""),
    ("ELECTRIC_CHARGE", "C", ""),
    ("ELECTRIC_CAPACITANCE", "F", ""),
    ("ELECTRIC_POTENTIAL", "V", ""),
    ("ELECTRIC_RESISTANCE", "ohm", ""),
    ("ELECTRIC_INDUCTANCE", "H", ""),
    ("ELECTRIC_CONDUCTANCE", "S", ""),
    ("MAGNETIC_FLUX", "Wb", ""),
    ("MAGNETIC_FLUX_DENSITY", "T", ""),
];

pub static CGS: &[SystemSpec] = &[
    ("LENGTH", "m", "c"),
    ("MASS", "g", ""),
    ("TIME", "s", ""),
    ("CURRENT", "abA", ""),
    ("TEMPERATURE", "K", ""),
    ("LUMINOUS_INTENSITY", "cd", ""),
    ("AMOUNT_OF_SUBSTANCE", "mol", ""),
    ("ANGLE", "rad", ""),
    ("BIT", "bits", ""),
    ("FORCE", "dyn", ""),
    ("ENERGY", "erg", ""),
];

pub static US: &[SystemSpec] = &[
    ("LENGTH", "ft", ""),
    ("MASS", "lbm", ""),
    ("TIME", "s", ""),
    ("CURRENT", "A", ""),
    ("TEMPERATURE", "degF", ""),
    ("LUMINOUS_INTENSITY", "cd", ""),
    ("AMOUNT_OF_SUBSTANCE", "mol", ""),
    ("ANGLE", "rad", ""),
    ("BIT", "bits", ""),
    ("FORCE", "lbf", ""),
    ("ENERGY", "BTU", ""),
    ("POWER", "hp", ""),
    ("PRESSURE", "psi", ""),
];

pub static SYSTEMS: &[(&str, &[SystemSpec])] = &[("si", SI), ("cgs", CGS), ("us", US)];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_unit_references_known_tables() {
        let quantities: HashSet<&str> = QUANTITIES.iter().map(|q| q.0).collect();
        let tables: HashSet<&str> = PREFIX_TABLES.iter().map(|t| t.0).collect();
        for unit in UNITS {
            assert!(quantities.contains(unit.1), "unknown quantity for {}", unit.0);
            assert!(tables.contains(unit.2), "unknown prefix table for {}", unit.0);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for name in UNITS.iter().map(|u| u.0).chain(ALIASES.iter().map(|a| a.0)) {
            assert!(seen.insert(name), "duplicate unit name: {name}");
        }
    }

    #[test]
    fn test_aliases_point_at_units() {
        let names: HashSet<&str> = UNITS.iter().map(|u| u.0).collect();
        for (alias, target) in ALIASES {
            assert!(names.contains(target), "alias {alias} targets unknown {target}");
        }
    }

    #[test]
    fn test_every_prefix_table_has_empty_prefix() {
        for (name, parts) in PREFIX_TABLES {
            assert!(
                parts.iter().any(|part| part.iter().any(|p| p.0.is_empty())),
                "prefix table {name} lacks the empty prefix"
            );
        }
    }

    #[test]
    fn test_si_covers_every_base_dimension() {
        for dim in crate::types::BaseDimension::ALL {
            assert!(SI.iter().any(|(q, _, _)| *q == dim.name()), "SI lacks {dim}");
        }
    }
}
