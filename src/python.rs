//! Python bindings via PyO3

use crate::combine::{CombineStrategy, OnlyFilter};
use crate::rule::Rule;
use crate::scaler::ScaleRules;
use pyo3::prelude::*;

/// Strategy given either by name ("sum") or legacy numeric code (7)
#[derive(FromPyObject)]
enum StrategyArg {
    Code(u8),
    Name(String),
}

impl StrategyArg {
    fn resolve(self) -> PyResult<CombineStrategy> {
        let strategy = match self {
            StrategyArg::Code(code) => CombineStrategy::try_from(code)?,
            StrategyArg::Name(name) => name.parse()?,
        };
        Ok(strategy)
    }
}

/// Python-facing wrapper around [`ScaleRules`]
#[pyclass(name = "ScaleRules", module = "scale_rules")]
pub struct PyScaleRules {
    inner: ScaleRules,
}

#[pymethods]
impl PyScaleRules {
    #[new]
    #[pyo3(signature = (rules=None, strategy=None, only=None))]
    fn new(rules: Option<&str>, strategy: Option<StrategyArg>, only: Option<bool>) -> PyResult<Self> {
        let mut inner = match rules {
            Some(json) => ScaleRules::from_json(json)?,
            None => ScaleRules::new(),
        };
        if let Some(strategy) = strategy {
            inner.set_combine_strategy(strategy.resolve()?);
        }
        inner.set_only_filter(OnlyFilter::from(only));
        Ok(Self { inner })
    }

    /// Replace the rules with a JSON array of rule strings
    fn set_rules(&mut self, rules: &str) -> PyResult<()> {
        self.inner.set_rules(ScaleRules::parse(rules)?);
        Ok(())
    }

    fn set_combine_strategy(&mut self, strategy: StrategyArg) -> PyResult<()> {
        self.inner.set_combine_strategy(strategy.resolve()?);
        Ok(())
    }

    /// True: only matched results, False: only unmatched, None: all
    #[pyo3(signature = (only=None))]
    fn set_only(&mut self, only: Option<bool>) {
        self.inner.set_only_filter(OnlyFilter::from(only));
    }

    #[getter]
    fn strategy(&self) -> &'static str {
        self.inner.config().strategy.name()
    }

    fn float(&self, value: f64) -> f64 {
        self.inner.evaluate_as_float(value)
    }

    fn int(&self, value: i64) -> i64 {
        self.inner.evaluate_as_int(value)
    }

    fn __len__(&self) -> usize {
        self.inner.rules().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "ScaleRules(rules={}, strategy='{}')",
            self.inner.rules().len(),
            self.inner.config().strategy
        )
    }
}

/// Evaluate a single rule: returns (value, matched)
#[pyfunction]
fn evaluate_rule(rule: &str, value: f64) -> PyResult<(f64, bool)> {
    let outcome = Rule::from(rule).evaluate(value)?;
    Ok((outcome.value, outcome.matched))
}

/// Python module definition
#[pymodule]
fn scale_rules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyScaleRules>()?;
    m.add_function(wrap_pyfunction!(evaluate_rule, m)?)?;
    Ok(())
}
