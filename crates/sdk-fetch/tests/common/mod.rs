//! Shared fixtures: a local HTTP server and zip archive builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tiny_http::{Response, Server};
use zip::write::SimpleFileOptions;

/// Serves fixed bodies by path and records every requested path.
pub struct TestServer {
    server: Arc<Server>,
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    pub fn start(routes: Vec<(&str, u16, Vec<u8>)>) -> Self {
        Self::start_with(|_| routes)
    }

    /// Start a server whose routes depend on its own base URL
    pub fn start_with<'a, F>(routes: F) -> Self
    where
        F: FnOnce(&str) -> Vec<(&'a str, u16, Vec<u8>)>,
    {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let base_url = format!("http://{}", addr);

        let routes = routes(&base_url);
        let routes: HashMap<String, (u16, Vec<u8>)> = routes
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), (status, body)))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for request in server.incoming_requests() {
                    let path = request.url().to_string();
                    requests.lock().unwrap().push(path.clone());

                    let response = match routes.get(&path) {
                        Some((status, body)) => {
                            Response::from_data(body.clone()).with_status_code(*status)
                        }
                        None => Response::from_data(b"not found".to_vec()).with_status_code(404),
                    };
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            base_url,
            requests,
            handle: Some(handle),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Build a zip archive; `None` contents add a directory entry
pub fn build_zip(entries: &[(&str, Option<&[u8]>)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, contents) in entries {
        match contents {
            Some(data) => {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
            None => writer.add_directory(*name, options).unwrap(),
        }
    }
    writer.finish().unwrap().into_inner()
}

/// An archive laid out like the published DJI SDK zip
pub fn sdk_archive() -> Vec<u8> {
    build_zip(&[
        ("iOS_Mobile_SDK/", None),
        ("iOS_Mobile_SDK/DJISDK.framework/", None),
        ("iOS_Mobile_SDK/DJISDK.framework/DJISDK", Some(b"framework binary")),
        ("iOS_Mobile_SDK/DJISDK.framework/Headers/DJISDK.h", Some(b"#import <Foundation/Foundation.h>\n")),
        ("iOS_Mobile_SDK/README.md", Some(b"DJI Mobile SDK")),
        ("__MACOSX/", None),
        ("__MACOSX/iOS_Mobile_SDK/._README.md", Some(b"resource fork")),
    ])
}

pub fn podspec_with_source(url: &str) -> Vec<u8> {
    format!(
        "Pod::Spec.new do |s|\n  s.name = 'DJI-SDK-iOS'\n  s.version = '4.16.2'\n  s.source = {{ :http => \"{}\" }}\n  s.platform = :ios, '11.0'\nend\n",
        url
    )
    .into_bytes()
}

/// Sorted relative paths of everything under `root`
pub fn snapshot(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    paths.sort();
    paths
}
