// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/fpl.ico");
        res.set("ProductName", "FPL Rules Reference");
        res.compile().unwrap();
    }
}
