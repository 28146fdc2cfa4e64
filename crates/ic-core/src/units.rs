// ic-core/src/units.rs

use uom::si::f64::{
    Angle as UomAngle, Area as UomArea, Force as UomForce, Length as UomLength,
    Pressure as UomPressure, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Angle = UomAngle;
pub type Area = UomArea;
pub type Force = UomForce;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

/// International knot (1852 m/h).
#[inline]
pub fn knots(v: f64) -> Velocity {
    use uom::si::velocity::knot;
    Velocity::new::<knot>(v)
}

#[inline]
pub fn newton(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn meganewton(v: f64) -> Force {
    use uom::si::force::meganewton;
    Force::new::<meganewton>(v)
}

#[inline]
pub fn megapascal(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn as_degrees(a: Angle) -> f64 {
    use uom::si::angle::degree;
    a.get::<degree>()
}

#[inline]
pub fn as_kilonewtons(f: Force) -> f64 {
    use uom::si::force::kilonewton;
    f.get::<kilonewton>()
}

#[inline]
pub fn as_meganewtons(f: Force) -> f64 {
    use uom::si::force::meganewton;
    f.get::<meganewton>()
}

#[inline]
pub fn as_megapascals(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}
