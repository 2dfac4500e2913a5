/// Stop once an iteration improves the error by less than `tolerance`,
/// measured relative to the error of the initial guess
pub fn has_converged(
    initial_error: f64,
    previous_error: f64,
    current_error: f64,
    tolerance: f64,
) -> bool {
    if initial_error <= 0.0 {
        return true;
    }

    let improvement = (previous_error - current_error) / initial_error;
    improvement < tolerance
}

pub fn should_continue(iteration: usize, max_iterations: usize) -> bool {
    iteration < max_iterations
}
