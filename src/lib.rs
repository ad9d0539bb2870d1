//! Calculatrice RPN — bibliothèque
//!
//! Le noyau évalue une expression infixe en deux temps :
//! shunting-yard (infixe -> RPN) puis pile de f64.
//!
//! ```
//! use calculatrice_rpn::noyau::evaluate_expression;
//!
//! assert_eq!(evaluate_expression("(3 + 4) * 2").unwrap(), 14.0);
//! ```

pub mod noyau;

pub use noyau::{evaluate_expression, ErreurCalcul};
