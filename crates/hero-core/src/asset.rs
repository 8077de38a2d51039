//! glTF/GLB decoding into [`MeshNode`]s.

use crate::error::{Error, Result};
use crate::geometry::MeshNode;
use glam::{Mat4, Vec3};

/// Decode a GLB (or self-contained glTF) and collect the world-space inputs
/// for every mesh primitive in the default scene.
///
/// Only buffers embedded in the GLB binary chunk are resolved.
pub fn load_glb(bytes: &[u8]) -> Result<Vec<MeshNode>> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.as_deref();

    let mut buffers: Vec<&[u8]> = Vec::new();
    for buffer in gltf.document.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => {
                let data = blob.ok_or(Error::MissingBuffer {
                    index: buffer.index(),
                })?;
                buffers.push(data);
            }
            gltf::buffer::Source::Uri(uri) => {
                return Err(Error::ExternalBuffer {
                    uri: uri.to_string(),
                })
            }
        }
    }

    let scene = gltf
        .document
        .default_scene()
        .or_else(|| gltf.document.scenes().next())
        .ok_or(Error::NoScene)?;

    let mut nodes = Vec::new();
    for node in scene.nodes() {
        collect_node(&node, Mat4::IDENTITY, &buffers, &mut nodes);
    }
    let total: usize = nodes.iter().map(|n: &MeshNode| n.positions.len()).sum();
    log::info!(
        "[asset] decoded {} primitives, {} vertices",
        nodes.len(),
        total
    );
    Ok(nodes)
}

fn collect_node(node: &gltf::Node, parent: Mat4, buffers: &[&[u8]], out: &mut Vec<MeshNode>) {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());
    let world = parent * local;

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| buffers.get(buffer.index()).copied());
            match reader.read_positions() {
                Some(iter) => {
                    let positions: Vec<Vec3> = iter.map(Vec3::from).collect();
                    out.push(MeshNode::new(world, positions));
                }
                None => log::debug!(
                    "[asset] mesh {:?} primitive {} has no POSITION attribute",
                    mesh.name(),
                    primitive.index()
                ),
            }
        }
    }

    for child in node.children() {
        collect_node(&child, world, buffers, out);
    }
}
