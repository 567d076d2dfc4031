#[cfg(test)]
mod parsing {
    mod integration;
}

#[cfg(test)]
mod tracking {
    mod integration;
}
