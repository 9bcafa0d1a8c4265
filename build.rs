fn main() {
    // Only compile Windows resources on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "webview-shell");
        res.set("FileDescription", "Desktop shell hosting a local web page");
        res.compile().expect("Failed to compile Windows resources");
    }
}
