//! Testing helpers.

use assert_float_eq::*;

pub fn assert_slice_f64_near(expected: &[f64], actual: &[f64], distance: u32) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_f64_near!(expected, actual, distance);
        }
    }
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// A report in the English layout, carrying every section the extractor understands.
pub const ENGLISH_REPORT: &str = "\
Arsenal vs Chelsea
Pre-match
Full time result
1 X 2
2.10 3.40 3.60
  2:1
(HT 1:0)
  67:12
Stats Live
Attacks
85
70
Dangerous Attacks
40
31
Shots On Target
6
3
Shots Off Target
5
4
Corners
7
2
Ball Possession
58%
42%
Yellow Cards
1
3
Red Cards
0
0
";

/// A report in the Spanish layout, lacking the header block so that the fallbacks apply.
pub const SPANISH_REPORT: &str = "\
Betis - Sevilla
Pre-partido
Resultado final
1 X 2
1.95 3.30 4.20
Marcador 0 - 1
Minuto de Juego 38
Estadísticas en vivo
Ataques Peligrosos
22
15
Ataques
41
33
Tiros a Portería
3
2
Tiros Fuera
4
1
Córners
5
1
Posesión del Balón
61
39
Tarjetas Amarillas
2
2
Tarjetas Rojas
0
1
";
