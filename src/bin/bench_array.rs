use microbench::cli::standalone_main;
use microbench::Program;

fn main() {
    standalone_main(Program::Array);
}
