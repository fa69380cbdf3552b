/*!
# Benchmark: `commandeer::Token`
*/

use brunch::{
	Bench,
	benches,
};
use commandeer::{
	Token,
	Value,
};

benches!(
	Bench::new("commandeer::Token", "classify(Hello World)")
		.with(|| Token::classify("Hello World")),

	Bench::new("commandeer::Token", "classify(-dp)")
		.with(|| Token::classify("-dp")),

	Bench::new("commandeer::Token", "classify(--outDir)")
		.with(|| Token::classify("--outDir")),

	Bench::new("commandeer::Token", "classify(--outDir=/tmp/out)")
		.with(|| Token::classify("--outDir=/tmp/out")),

	Bench::new("commandeer::Value", "coerce(199)")
		.with(|| Value::coerce("199")),

	Bench::new("commandeer::Value", "coerce(-1.5)")
		.with(|| Value::coerce("-1.5")),

	Bench::new("commandeer::Value", "coerce(true)")
		.with(|| Value::coerce("true")),

	Bench::new("commandeer::Value", "coerce(Björk)")
		.with(|| Value::coerce("Björk"))
);
