//! Tidy tree layout (Reingold–Tilford, linear-time variant by Buchheim, Jünger and Leipert).
//!
//! Nodes are addressed by index; node `0` is the root and `children[v]` lists the children
//! of `v` in display order. Siblings are separated by `1`, cousins by `2`, and the result is
//! scaled so the tree exactly fills `size = (breadth, depth)`.

/// Position of one node: `breadth` along the sibling axis, `depth` along the root→leaf axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TidyPos {
    pub(crate) breadth: f64,
    pub(crate) depth: f64,
    pub(crate) level: usize,
}

pub(crate) fn tidy_tree(children: &[Vec<usize>], size: (f64, f64)) -> Vec<TidyPos> {
    if children.is_empty() {
        return Vec::new();
    }
    let mut walker = Walker::new(children);
    let pre = walker.pre_order();
    let post = walker.post_order();

    for &v in &post {
        walker.first_walk(v);
    }
    let sup = walker.sup;
    walker.m[sup] = -walker.z[0];
    let mut breadth = vec![0.0; children.len()];
    for &v in &pre {
        let p = walker.wparent[v];
        breadth[v] = walker.z[v] + walker.m[p];
        walker.m[v] += walker.m[p];
    }

    let mut left = 0usize;
    let mut right = 0usize;
    let mut bottom = 0usize;
    for &v in &pre {
        if breadth[v] < breadth[left] {
            left = v;
        }
        if breadth[v] > breadth[right] {
            right = v;
        }
        if walker.level[v] > walker.level[bottom] {
            bottom = v;
        }
    }

    let s = if left == right {
        1.0
    } else {
        walker.separation(left, right) / 2.0
    };
    let tx = s - breadth[left];
    let kx = size.0 / (breadth[right] + s + tx);
    let ky = size.1 / (walker.level[bottom].max(1) as f64);

    (0..children.len())
        .map(|v| TidyPos {
            breadth: (breadth[v] + tx) * kx,
            depth: walker.level[v] as f64 * ky,
            level: walker.level[v],
        })
        .collect()
}

struct Walker<'a> {
    children: &'a [Vec<usize>],
    /// Index of the synthetic super-root that parents node `0`.
    sup: usize,
    parent: Vec<Option<usize>>,
    wparent: Vec<usize>,
    sibling_index: Vec<usize>,
    level: Vec<usize>,
    z: Vec<f64>,
    m: Vec<f64>,
    c: Vec<f64>,
    s: Vec<f64>,
    thread: Vec<Option<usize>>,
    ancestor: Vec<usize>,
    default_ancestor: Vec<Option<usize>>,
}

impl<'a> Walker<'a> {
    fn new(children: &'a [Vec<usize>]) -> Self {
        let n = children.len();
        let sup = n;
        let mut parent = vec![None; n];
        let mut wparent = vec![sup; n + 1];
        let mut sibling_index = vec![0; n + 1];
        for (v, kids) in children.iter().enumerate() {
            for (i, &child) in kids.iter().enumerate() {
                parent[child] = Some(v);
                wparent[child] = v;
                sibling_index[child] = i;
            }
        }

        Self {
            children,
            sup,
            parent,
            wparent,
            sibling_index,
            level: vec![0; n + 1],
            z: vec![0.0; n + 1],
            m: vec![0.0; n + 1],
            c: vec![0.0; n + 1],
            s: vec![0.0; n + 1],
            thread: vec![None; n + 1],
            ancestor: (0..=n).collect(),
            default_ancestor: vec![None; n + 1],
        }
    }

    fn kids(&self, v: usize) -> &'a [usize] {
        let children: &'a [Vec<usize>] = self.children;
        if v == self.sup {
            &[0]
        } else {
            &children[v]
        }
    }

    /// Root first, children left to right. Also fills in `level`.
    fn pre_order(&mut self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.children.len());
        let mut stack = vec![0usize];
        while let Some(v) = stack.pop() {
            order.push(v);
            for &child in self.kids(v).iter().rev() {
                self.level[child] = self.level[v] + 1;
                stack.push(child);
            }
        }
        order
    }

    /// Children (left to right) before their parent.
    fn post_order(&self) -> Vec<usize> {
        let mut stack = vec![0usize];
        let mut next = Vec::with_capacity(self.children.len());
        while let Some(v) = stack.pop() {
            next.push(v);
            stack.extend_from_slice(self.kids(v));
        }
        next.reverse();
        next
    }

    fn separation(&self, a: usize, b: usize) -> f64 {
        if self.parent[a] == self.parent[b] {
            1.0
        } else {
            2.0
        }
    }

    fn next_left(&self, v: usize) -> Option<usize> {
        self.kids(v).first().copied().or(self.thread[v])
    }

    fn next_right(&self, v: usize) -> Option<usize> {
        self.kids(v).last().copied().or(self.thread[v])
    }

    fn left_sibling(&self, v: usize) -> Option<usize> {
        let i = self.sibling_index[v];
        if i == 0 {
            None
        } else {
            Some(self.kids(self.wparent[v])[i - 1])
        }
    }

    fn first_walk(&mut self, v: usize) {
        let kids = self.kids(v);
        let w = self.left_sibling(v);

        if let (Some(&first), Some(&last)) = (kids.first(), kids.last()) {
            self.execute_shifts(v);
            let midpoint = (self.z[first] + self.z[last]) / 2.0;
            match w {
                Some(w) => {
                    self.z[v] = self.z[w] + self.separation(v, w);
                    self.m[v] = self.z[v] - midpoint;
                }
                None => self.z[v] = midpoint,
            }
        } else if let Some(w) = w {
            self.z[v] = self.z[w] + self.separation(v, w);
        }

        let p = self.wparent[v];
        let fallback = self.kids(p)[0];
        let current = self.default_ancestor[p].unwrap_or(fallback);
        self.default_ancestor[p] = Some(self.apportion(v, w, current));
    }

    fn execute_shifts(&mut self, v: usize) {
        let mut shift = 0.0;
        let mut change = 0.0;
        for &w in self.kids(v).iter().rev() {
            self.z[w] += shift;
            self.m[w] += shift;
            change += self.c[w];
            shift += self.s[w] + change;
        }
    }

    fn move_subtree(&mut self, wm: usize, wp: usize, shift: f64) {
        let span = (self.sibling_index[wp] - self.sibling_index[wm]) as f64;
        let change = shift / span;
        self.c[wp] -= change;
        self.s[wp] += shift;
        self.c[wm] += change;
        self.z[wp] += shift;
        self.m[wp] += shift;
    }

    fn next_ancestor(&self, vim: usize, v: usize, ancestor: usize) -> usize {
        let a = self.ancestor[vim];
        if self.wparent[a] == self.wparent[v] {
            a
        } else {
            ancestor
        }
    }

    fn apportion(&mut self, v: usize, w: Option<usize>, mut ancestor: usize) -> usize {
        let Some(w) = w else {
            return ancestor;
        };

        let mut vop = v;
        let mut vom = self.kids(self.wparent[v])[0];
        let mut sip = self.m[v];
        let mut sop = self.m[v];
        let mut sim = self.m[w];
        let mut som = self.m[vom];

        let mut vim = Some(w);
        let mut vip = Some(v);
        loop {
            vim = vim.and_then(|x| self.next_right(x));
            vip = vip.and_then(|x| self.next_left(x));
            let (Some(im), Some(ip)) = (vim, vip) else {
                break;
            };

            if let Some(next) = self.next_left(vom) {
                vom = next;
            }
            if let Some(next) = self.next_right(vop) {
                vop = next;
            }
            self.ancestor[vop] = v;

            let shift = self.z[im] + sim - self.z[ip] - sip + self.separation(im, ip);
            if shift > 0.0 {
                let wm = self.next_ancestor(im, v, ancestor);
                self.move_subtree(wm, v, shift);
                sip += shift;
                sop += shift;
            }
            sim += self.m[im];
            sip += self.m[ip];
            som += self.m[vom];
            sop += self.m[vop];
        }

        if let Some(im) = vim
            && self.next_right(vop).is_none()
        {
            self.thread[vop] = Some(im);
            self.m[vop] += sim - sop;
        }
        if let Some(ip) = vip
            && self.next_left(vom).is_none()
        {
            self.thread[vom] = Some(ip);
            self.m[vom] += sip - som;
            ancestor = v;
        }
        ancestor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tidy.rs"]
mod tests;
