use uom::si::{
    f64::{Frequency, Length},
    frequency::hertz,
    length::millimeter,
};

use super::{Bore, InputError, LipCovered, Quena, Resonator, ToneHoles};

pub(super) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

pub(super) fn hz(value: f64) -> Frequency {
    Frequency::new::<hertz>(value)
}

/// Equal-tempered frequency of the notes used by the reference instruments.
pub(super) fn note(name: &str) -> Frequency {
    let value = match name {
        "G4" => 391.995,
        "A4" => 440.0,
        "B4" => 493.883,
        "C5" => 523.251,
        "D5" => 587.330,
        "E5" => 659.255,
        "F#5" => 739.989,
        "G5" => 783.991,
        _ => panic!("no reference frequency for {name}"),
    };
    hz(value)
}

/// Water pipe the reference instruments were cut from.
pub(super) fn water_pipe() -> Bore {
    Bore::new_unchecked(mm(18.0), mm(3.5))
}

/// Ringed quena in G4 with seven holes from A4 to G5.
pub(super) fn ringed_g4_quena() -> Result<Quena, InputError> {
    let body = Resonator::new(water_pipe(), note("G4"), LipCovered::new(mm(9.5))?)?;
    let holes = ToneHoles::new(
        ["A4", "B4", "C5", "D5", "E5", "F#5", "G5"]
            .into_iter()
            .map(note)
            .collect(),
        vec![
            mm(10.0),
            mm(12.0),
            mm(9.0),
            mm(12.0),
            mm(12.0),
            mm(12.0),
            mm(7.5),
        ],
    )?;
    Ok(Quena::new(body, holes).with_ring(true))
}
