use crate::mach::{Event, Runtime};

mod gosub_test;

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) | Event::List(ps) => {
                s.push_str(ps);
            }
            Event::Trace(ts) => {
                s.push_str(&format!("TRACE: {}\n", ts));
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
        }
        prev_running = event == Event::Running;
    }
    s
}
