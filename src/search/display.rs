use std::fmt;

use super::Step;

/// Rendering contract for recovered steps. Operands print as the
/// values they stand for; a breakdown line per node reads
/// `<value> = <step>`.
impl<N: fmt::Display> fmt::Display for Step<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Step::Repunit(value) => write!(f, "{}", value),
            Step::Add(x, y) => write!(f, "{} + {}", x, y),
            Step::Sub(x, y) => write!(f, "{} - {}", x, y),
            Step::Mul(x, y) => write!(f, "{} * {}", x, y),
            Step::Div(x, y) => write!(f, "{} / {}", x, y),
            Step::Sqrt(x) => write!(f, "√{}", x),
            Step::Factorial(x) => write!(f, "{}!", x),
            Step::FactorialRatio(x, y) => write!(f, "{}! / {}!", x, y),
            Step::FactorialPlus(x, y) => write!(f, "({}! + {}!) / {}!", x, y, y),
            Step::FactorialMinus(x, y) => write!(f, "({}! - {}!) / {}!", x, y, y),
            Step::Power {
                base,
                exponent,
                sqrts,
                reciprocal,
            } => {
                for _ in 0..*sqrts {
                    write!(f, "√")?;
                }
                write!(f, "{}^", base)?;
                if *reciprocal {
                    write!(f, "-")?;
                }
                write!(f, "{}", exponent)
            }
        }
    }
}
