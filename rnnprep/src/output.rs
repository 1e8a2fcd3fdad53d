use price_loader::LoaderConfig;
use windowing::SampleSet;

pub fn print_info(message: &str) {
    println!("[rnnprep][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[rnnprep][ERROR]: {message}");
}

pub fn print_shape(samples: &SampleSet) {
    let (n, window, features) = samples.inputs().dim();
    let (targets, width) = samples.targets().dim();
    println!("X shape = ({n}, {window}, {features}), y shape = ({targets}, {width})");
}

pub fn print_config(config: &str) {
    print!("{config}");
}

pub fn print_no_samples(config: &LoaderConfig) {
    print_info(&format!(
        "No samples: need more than {} '{}' rows for {}='{}'",
        config.window, config.value_column, config.symbol_column, config.symbol
    ));
}
