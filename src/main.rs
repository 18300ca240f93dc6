use psi_sim::compiler::{Circuit, GateRecord, ParameterRecord};
use psi_sim::runtime::{self, Renderer, RunOptions, TextRenderer, DEFAULT_SHOTS};
use psi_sim::{PsiError, HALF_PI, PI};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Circuit file accepted by `psi-sim run`.
#[derive(Debug, Deserialize)]
struct CircuitFile {
    num_qubits: usize,
    #[serde(default)]
    shots: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    circuit: Vec<GateRecord>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("demo")           => run_all_demos(),
        Some("run")                   => cli_run(&args[2..]),
        Some("help") | Some("--help") => print_help(),
        Some(unknown) => {
            eprintln!("Unknown command '{}'. Run 'psi-sim help' for usage.", unknown);
            std::process::exit(1);
        }
    }
}

// ── CLI ───────────────────────────────────────────────────────────────────

fn cli_run(args: &[String]) {
    let Some(path) = args.first() else {
        eprintln!("Usage: psi-sim run <circuit.json> [--shots N] [--seed S] [--exact]");
        std::process::exit(1);
    };

    let file = match load_circuit_file(path) {
        Ok(f) => f,
        Err(e) => { eprintln!("Cannot load '{}': {}", path, e); std::process::exit(1); }
    };

    let mut options = RunOptions {
        shots: file.shots.unwrap_or(DEFAULT_SHOTS),
        seed: file.seed,
    };
    let exact = match apply_flags(&args[1..], &mut options) {
        Ok(exact) => exact,
        Err(msg) => { eprintln!("{msg}"); std::process::exit(1); }
    };

    match runtime::execute_records(&file.circuit, file.num_qubits, options) {
        Ok(result) => {
            if let Err(e) = TextRenderer::stdout().render(&result.histogram, result.shots) {
                eprintln!("Cannot write results: {e}");
                std::process::exit(1);
            }
            if exact {
                println!("Exact probabilities");
                for (label, p) in result.significant_states(1e-12) {
                    println!("    {label} : {p:.6}");
                }
            }
        }
        Err(e) => {
            eprintln!("Please double check your circuit.");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn load_circuit_file(path: &str) -> Result<CircuitFile, PsiError> {
    let source = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

/// Apply `--shots` / `--seed` to `options`; returns whether `--exact` was given.
fn apply_flags(flags: &[String], options: &mut RunOptions) -> Result<bool, String> {
    let mut exact = false;
    let mut iter = flags.iter();
    while let Some(flag) = iter.next() {
        if flag == "--exact" {
            exact = true;
            continue;
        }
        let value = iter
            .next()
            .ok_or_else(|| format!("Missing value for '{flag}'"))?;
        match flag.as_str() {
            "--shots" => {
                options.shots = value
                    .parse()
                    .map_err(|_| format!("Invalid shot count '{value}'"))?;
            }
            "--seed" => {
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid seed '{value}'"))?,
                );
            }
            other => return Err(format!("Unknown flag '{other}'")),
        }
    }
    Ok(exact)
}

fn print_help() {
    println!("Usage: psi-sim [COMMAND] [ARGS]\n");
    println!("Commands:");
    println!("  demo                                 Run built-in demonstration circuits");
    println!("  run <circuit.json> [--shots N] [--seed S] [--exact]");
    println!("                                       Simulate a circuit file and print counts;");
    println!("                                       --exact also prints |amplitude|² per state");
    println!("  help                                 Show this message\n");
    println!("Circuit file:");
    println!("  {{\"num_qubits\": 2, \"shots\": 1024, \"seed\": 7,");
    println!("   \"circuit\": [{{\"gate\": \"h\", \"target\": [0]}}, {{\"gate\": \"cx\", \"target\": [0, 1]}}]}}\n");
    println!("Gates:");
    println!("  x h y z s t <q>                      Fixed single-qubit gates");
    println!("  r <q>  parameters: phi               Phase rotation diag(1, e^(iφ))");
    println!("  u3 <q> parameters: phi theta lamb    General rotation");
    println!("  cx cy cz <control> <target>          Controlled gates\n");
    println!("Set RUST_LOG=debug to trace every gate application.");
}

// ── Demos ─────────────────────────────────────────────────────────────────

fn run_all_demos() {
    demo_example_circuit();
    demo_superposition();
    demo_bell_state();
}

fn render_demo(title: &str, result: Result<runtime::ExecutionResult, PsiError>) {
    println!("━━━ {title} ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    match result {
        Ok(result) => {
            if let Err(e) = TextRenderer::stdout().render(&result.histogram, result.shots) {
                eprintln!("Cannot write results: {e}");
            }
        }
        Err(e) => eprintln!("Error: {e}"),
    }
    println!();
}

fn demo_example_circuit() {
    let records = vec![
        GateRecord::new("h", vec![0]),
        GateRecord::new("cx", vec![0, 1]),
        GateRecord::new("u3", vec![2]).with_parameters(ParameterRecord::u3(HALF_PI, HALF_PI, PI)),
    ];
    let result = runtime::execute_records(&records, 4, RunOptions::default());
    render_demo("Demo 1: h, cx, u3 on 4 qubits", result);
}

fn demo_superposition() {
    let result = runtime::execute(&Circuit::new().h(0), 1, RunOptions::default());
    render_demo("Demo 2: Uniform superposition", result);
}

fn demo_bell_state() {
    let result = runtime::execute(&Circuit::new().h(0).cx(0, 1), 2, RunOptions::default());
    render_demo("Demo 3: Bell state |Φ+⟩", result);
}
