use scene_stats::core::{
    ArmatureData, Bone, DynTopoMesh, EditMesh, GpFrame, GpLayer, GpStroke, GreasePencilData,
    MeshData, MeshView, Pose, PoseChannel, SculptSession,
};
use scene_stats::shared::{GpuMemory, StaticGpu, StaticMemory};
use scene_stats::{
    Collection, CollectionId, ObjectData, ObjectId, ObjectMode, Scene, SceneObject, StatsEngine,
    StatsOptions, ViewLayer,
};

fn test_options() -> StatsOptions {
    StatsOptions {
        version_tag: "v-test".to_string(),
        ..StatsOptions::default()
    }
}

fn quiet_engine() -> StatsEngine {
    StatsEngine::new().with_options(StatsOptions {
        show_memory: false,
        show_gpu_memory: false,
        ..test_options()
    })
}

/// 20 Vertices, 8 Vierecke
fn grid_mesh(id: u64, name: &str) -> SceneObject {
    SceneObject::new(ObjectId(id), name, ObjectData::Mesh(MeshData::default()))
        .with_evaluated_mesh(MeshView::from_polygons(20, 28, &[4; 8]))
}

fn edit_mesh(id: u64, name: &str, verts: u64, selected: u64) -> SceneObject {
    SceneObject::new(
        ObjectId(id),
        name,
        ObjectData::Mesh(MeshData {
            edit: Some(EditMesh {
                vert_count: verts,
                vert_selected: selected,
                edge_count: verts,
                edge_selected: 0,
                face_count: 1,
                face_selected: 0,
                tri_count: 2,
            }),
        }),
    )
    .with_mode(ObjectMode::Edit)
}

#[test]
fn test_single_selected_mesh_end_to_end() {
    let mut scene = Scene::new();
    scene.add_object(grid_mesh(1, "Grid").with_selected(true));
    let mut layer = ViewLayer::new("View Layer");

    let engine = StatsEngine::new().with_options(test_options());
    let info = engine.display_string(&scene, &mut layer).to_string();

    assert!(info.contains("Verts:20 | Faces:8 | Tris:16 | Objects:1/1"));
    assert!(info.starts_with("Scene Collection | "));
    assert!(info.ends_with(" | v-test"));

    let stats = layer.stats().expect("Statistik sollte gecacht sein");
    assert_eq!(stats.verts, 20);
    assert_eq!(stats.faces, 8);
    assert_eq!(stats.tris, 16);
    assert_eq!(stats.objects, 1);
    assert_eq!(stats.objects_selected, 1);
    assert!(stats.is_consistent());
}

#[test]
fn test_display_string_is_cached_until_invalidated() {
    let mut scene = Scene::new();
    scene.add_object(grid_mesh(1, "Grid"));
    let mut layer = ViewLayer::new("View Layer");
    let engine = quiet_engine();

    let first = engine.display_string(&scene, &mut layer).to_string();
    let second = engine.display_string(&scene, &mut layer).to_string();
    assert_eq!(first, second);
    assert_eq!(layer.stats_generation(), 1);

    // Szenenänderung allein verwirft den Cache nicht
    scene.add_object(grid_mesh(2, "Grid.001"));
    assert_eq!(engine.display_string(&scene, &mut layer), first);
    assert_eq!(layer.stats_generation(), 1);

    engine.invalidate(&mut layer);
    assert!(layer.cached_info().is_none());
    let refreshed = engine.display_string(&scene, &mut layer).to_string();
    assert!(refreshed.contains("Verts:40 | Faces:16 | Tris:32 | Objects:0/2"));
    assert_eq!(layer.stats_generation(), 2);
}

#[test]
fn test_view_layers_keep_separate_caches() {
    let mut scene = Scene::new();
    scene.add_object(grid_mesh(1, "Grid"));
    let engine = quiet_engine();

    let mut main = ViewLayer::new("Main");
    let mut other = ViewLayer::new("Other").with_active_object(ObjectId(1));

    engine.display_string(&scene, &mut main);
    assert!(other.stats().is_none());

    let info = engine.display_string(&scene, &mut other).to_string();
    assert!(info.starts_with("Scene Collection | Grid | "));
    assert_eq!(main.stats_generation(), 1);
    assert_eq!(other.stats_generation(), 1);
}

#[test]
fn test_active_collection_name_is_prefixed() {
    let mut scene = Scene::new();
    scene.add_collection(Collection::new(CollectionId(5), "Props"));
    scene.add_object(grid_mesh(1, "Grid"));
    let mut layer = ViewLayer::new("View Layer").with_active_collection(CollectionId(5));

    let info = quiet_engine().display_string(&scene, &mut layer).to_string();
    assert!(info.starts_with("Props | Verts:20"));
}

#[test]
fn test_edit_session_counts_only_edited_objects() {
    let mut scene = Scene::new();
    scene.add_object(edit_mesh(1, "Cube", 8, 2));
    scene.add_object(edit_mesh(2, "Cube.001", 8, 8));
    scene.add_object(grid_mesh(3, "Grid").with_selected(true));
    scene.add_object(
        SceneObject::new(ObjectId(4), "Rig", ObjectData::Armature(ArmatureData::default()))
            .with_mode(ObjectMode::Edit),
    );
    let mut layer = ViewLayer::new("View Layer").with_active_object(ObjectId(1));
    let engine = quiet_engine();

    let stats = engine.compute(&scene, &layer);
    assert_eq!(stats.verts, 16);
    assert_eq!(stats.verts_selected, 10);
    assert_eq!(stats.tris, 4);
    // Zähler anderer Modi bleiben null
    assert_eq!(stats.objects, 0);
    assert_eq!(stats.bones, 0);
    assert_eq!(stats.gp_points, 0);

    let info = engine.display_string(&scene, &mut layer).to_string();
    assert_eq!(info, "Cube | Verts:10/16 | Edges:0/16 | Faces:0/2 | Tris:4 | v-test");

    engine.invalidate(&mut layer);
    if let Some(cube) = scene.object_mut(ObjectId(1)) {
        cube.has_shape_keys = true;
    }
    let info = engine.display_string(&scene, &mut layer).to_string();
    assert!(info.starts_with("Cube | (Key) Verts:10/16"));
}

#[test]
fn test_pose_mode_with_memory_and_gpu_suffix() {
    let rig = SceneObject::new(
        ObjectId(1),
        "Rig",
        ObjectData::Armature(ArmatureData {
            layers: 0b01,
            edit_bones: None,
            pose: Some(Pose {
                channels: vec![
                    PoseChannel {
                        name: "Hip".to_string(),
                        bone: Some(Bone {
                            selected: true,
                            layers: 0b01,
                        }),
                    },
                    PoseChannel {
                        name: "Hidden".to_string(),
                        bone: Some(Bone {
                            selected: true,
                            layers: 0b10,
                        }),
                    },
                ],
            }),
        }),
    )
    .with_mode(ObjectMode::Pose);

    let mut scene = Scene::new();
    scene.add_object(rig);
    scene.add_object(grid_mesh(2, "Grid"));
    let mut layer = ViewLayer::new("View Layer").with_active_object(ObjectId(1));

    let engine = StatsEngine::new()
        .with_options(test_options())
        .with_memory(StaticMemory {
            in_use: 3_000_000,
            mapped: 1_000_000,
        })
        .with_gpu(StaticGpu(GpuMemory {
            total: 4_000_000_000,
            free: 1_000_000_000,
        }));

    let info = engine.display_string(&scene, &mut layer);
    assert_eq!(
        info,
        "Rig | Bones:1/2 | Mem: 2.0 MB (1.0 MB) | Free GPU Mem: 1.0 GB/4.0 GB | v-test"
    );

    let stats = layer.stats().expect("Statistik sollte gecacht sein");
    assert_eq!(stats.verts, 0);
    assert_eq!(stats.objects, 0);
}

#[test]
fn test_dyntopo_sculpt_reads_snapshot() {
    let mut blob = grid_mesh(1, "Blob").with_mode(ObjectMode::Sculpt);
    blob.sculpt = Some(SculptSession {
        dyntopo: Some(DynTopoMesh {
            vert_count: 12_000,
            face_count: 23_996,
        }),
    });
    let mut scene = Scene::new();
    scene.add_object(blob);
    scene.add_object(grid_mesh(2, "Grid"));
    let mut layer = ViewLayer::new("View Layer").with_active_object(ObjectId(1));

    let engine = StatsEngine::new()
        .with_options(test_options())
        .with_memory(StaticMemory {
            in_use: 5_000_000,
            mapped: 0,
        })
        .with_gpu(StaticGpu(GpuMemory {
            total: 0,
            free: 2_000_000,
        }));

    let info = engine.display_string(&scene, &mut layer);
    assert_eq!(
        info,
        "Blob | Verts:12,000 | Tris:23,996 | Free GPU Mem: 2.0 MB | v-test"
    );
    let stats = layer.stats().expect("Statistik sollte gecacht sein");
    assert_eq!(stats.faces, 0);
    assert_eq!(stats.objects, 0);
}

#[test]
fn test_sculpt_without_dyntopo_uses_object_mode() {
    let mut scene = Scene::new();
    scene.add_object(grid_mesh(1, "Blob").with_mode(ObjectMode::Sculpt));
    let layer = ViewLayer::new("View Layer").with_active_object(ObjectId(1));

    let stats = quiet_engine().compute(&scene, &layer);
    assert_eq!(stats.verts, 20);
    assert_eq!(stats.objects, 1);
}

#[test]
fn test_grease_pencil_template() {
    let sketch = SceneObject::new(
        ObjectId(1),
        "Sketch",
        ObjectData::GreasePencil(GreasePencilData {
            layers: vec![GpLayer {
                name: "Lines".to_string(),
                frames: vec![
                    GpFrame {
                        strokes: vec![GpStroke { point_count: 10 }, GpStroke { point_count: 5 }],
                    },
                    GpFrame {
                        strokes: vec![GpStroke { point_count: 7 }],
                    },
                ],
            }],
        }),
    )
    .with_selected(true);

    let mut scene = Scene::new();
    scene.add_object(sketch);
    let mut layer = ViewLayer::new("View Layer").with_active_object(ObjectId(1));

    let info = quiet_engine().display_string(&scene, &mut layer).to_string();
    assert_eq!(
        info,
        "Scene Collection | Sketch | Layers:1 | Frames:2 | Strokes:3 | Points:22 | Objects:1/1 | v-test"
    );
}

#[test]
fn test_missing_active_object_falls_back_to_object_mode() {
    let mut scene = Scene::new();
    scene.add_object(grid_mesh(1, "Grid"));
    let mut layer = ViewLayer::new("View Layer").with_active_object(ObjectId(99));

    let info = quiet_engine().display_string(&scene, &mut layer).to_string();
    assert!(info.starts_with("Scene Collection | Verts:20"));
}

#[test]
fn test_options_from_file_change_formatting() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis erwartet");
    let path = dir.path().join("scene_stats.toml");
    std::fs::write(
        &path,
        "digit_separator = \".\"\nbyte_units = \"Binary\"\nversion_tag = \"v-file\"\n",
    )
    .expect("Schreiben sollte klappen");
    let options = StatsOptions::load_from_file(&path);

    let mut scene = Scene::new();
    scene.add_object(
        SceneObject::new(ObjectId(1), "Dense", ObjectData::Mesh(MeshData::default()))
            .with_evaluated_mesh(MeshView::new(1_048_576, 0, 0, 0)),
    );
    let mut layer = ViewLayer::new("View Layer");

    let engine = StatsEngine::new()
        .with_options(options)
        .with_memory(StaticMemory {
            in_use: 1_048_576,
            mapped: 0,
        });
    let info = engine.display_string(&scene, &mut layer);
    assert_eq!(
        info,
        "Scene Collection | Verts:1.048.576 | Faces:0 | Tris:0 | Objects:0/1 | Mem: 1.0 MiB | v-file"
    );
}
